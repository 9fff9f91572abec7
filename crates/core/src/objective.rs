use std::convert::Infallible;

/// A scalar function `ℝ → ℝ` that a solver can evaluate.
///
/// Evaluation is fallible so that objectives which are undefined at some
/// points (a logarithm of a negative number, a model that fails to converge)
/// can report that to the solver instead of returning a meaningless value.
///
/// Closures of the form `Fn(f64) -> Result<f64, E>` implement `Objective`
/// automatically. Wrap an infallible `Fn(f64) -> f64` in [`Pure`].
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective is undefined at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> Objective for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        self(x)
    }
}

/// Adapter for objectives that cannot fail.
///
/// ```
/// use goldsect_core::{Objective, Pure};
///
/// let square = Pure(|x: f64| x * x);
/// assert_eq!(square.evaluate(3.0), Ok(9.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pure<F>(pub F);

impl<F> Objective for Pure<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}
