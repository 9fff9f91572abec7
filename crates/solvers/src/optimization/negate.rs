use goldsect_core::Objective;

/// Adapter that negates the objective value.
///
/// Minimizing a negated objective locates the maximum of the original.
#[derive(Debug, Clone, Copy)]
pub struct NegateObjective<O>(pub O);

impl<O: Objective> Objective for NegateObjective<O> {
    type Error = O::Error;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        self.0.evaluate(x).map(|v| -v)
    }
}
