use crate::optimization::Goal;

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }

    /// A point at `x` that loses every comparison under `goal`.
    pub(super) fn assumed_worse(x: f64, goal: Goal) -> Self {
        Self::new(x, goal.transform(f64::INFINITY))
    }
}
