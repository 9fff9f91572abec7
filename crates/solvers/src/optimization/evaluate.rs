use thiserror::Error;

use goldsect_core::Objective;

/// Errors that can occur when evaluating an objective.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The objective itself failed.
    #[error(transparent)]
    Objective(E),

    /// The objective returned NaN, which cannot be ordered.
    #[error("objective returned NaN")]
    NotANumber,
}

/// Evaluates the objective at `x`.
///
/// # Errors
///
/// Returns an error if the objective fails or produces NaN.
pub fn evaluate<O: Objective>(objective: &O, x: f64) -> Result<f64, EvalError<O::Error>> {
    let value = objective.evaluate(x).map_err(EvalError::Objective)?;
    if value.is_nan() {
        return Err(EvalError::NotANumber);
    }
    Ok(value)
}
