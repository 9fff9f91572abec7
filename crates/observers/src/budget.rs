use goldsect_core::Observer;

use crate::traits::CanStopEarly;

/// Stops the solver once a fixed number of events has been observed.
///
/// Useful as a cap on objective evaluations when each one is expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBudget {
    max_evals: usize,
    seen: usize,
}

impl EvalBudget {
    /// Creates a budget that stops on the `max_evals`-th observed event.
    #[must_use]
    pub fn new(max_evals: usize) -> Self {
        Self { max_evals, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns true once the budget has been used up.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.seen >= self.max_evals
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for EvalBudget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        self.is_exhausted().then(A::stop_early)
    }
}

/// Allows `&mut EvalBudget` to be passed by value and inspected afterwards.
impl<E, A: CanStopEarly> Observer<E, A> for &mut EvalBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
