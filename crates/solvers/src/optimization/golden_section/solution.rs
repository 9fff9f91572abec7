use std::fmt;

/// Indicates why the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The bracket width fell to or below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Converged => "converged",
            Self::MaxIters => "max_iters",
            Self::StoppedByObserver => "stopped_by_observer",
        })
    }
}

/// The result of a golden section search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the optimum: the midpoint of the final bracket.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Final bracket `[left, right]`.
    pub bracket: [f64; 2],

    /// Shrink iterations performed.
    pub iters: usize,

    /// Objective evaluations attempted, including the final midpoint.
    pub evals: usize,
}

impl Solution {
    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_serialized_names() {
        assert_eq!(Status::Converged.to_string(), "converged");
        assert_eq!(Status::MaxIters.to_string(), "max_iters");
        assert_eq!(Status::StoppedByObserver.to_string(), "stopped_by_observer");
    }

    #[test]
    fn width_of_final_bracket() {
        let solution = Solution {
            status: Status::Converged,
            x: 1.5,
            objective: 0.0,
            bracket: [1.0, 2.0],
            iters: 0,
            evals: 1,
        };
        assert!((solution.width() - 1.0).abs() < f64::EPSILON);
    }
}
