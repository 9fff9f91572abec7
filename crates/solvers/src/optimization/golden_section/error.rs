use super::ConfigError;
use crate::optimization::EvalError;

/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bracket is empty, reversed, or has a non-finite bound.
    #[error("invalid interval [{a}, {b}]: bounds must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    /// The solver configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The objective could not be evaluated at a probed point.
    #[error("objective evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub(super) fn evaluation<E>(x: f64, error: EvalError<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Evaluation {
            x,
            source: Box::new(error),
        }
    }
}
