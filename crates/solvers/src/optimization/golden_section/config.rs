use thiserror::Error;

/// Default convergence tolerance on the bracket width.
pub const DEFAULT_TOL: f64 = 1e-5;

/// Default cap on the number of shrink iterations.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The search stops once the bracket width is at most `tol`, or after
    /// `max_iters` shrink iterations, whichever comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not positive or not finite.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tol));
        }

        Ok(Self { tol, max_iters })
    }

    /// Returns the convergence tolerance on the bracket width.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
