use crate::optimization::EvalError;

use super::Point;

/// Events emitted by the golden section solver.
///
/// Each event provides the current evaluation (or failure) and the `other`
/// interior point, which is the point the solver compares against when
/// deciding which side of the bracket to keep. Observers can compare against
/// `other` to decide whether to stop early or steer the search with
/// [`Action::AssumeWorse`].
///
/// [`Action::AssumeWorse`]: super::Action::AssumeWorse
#[derive(Debug)]
pub enum Event<'a, E> {
    /// Successful evaluation of an interior point.
    Evaluated {
        /// The evaluated point (x and objective).
        point: Point,

        /// The other interior point.
        other: Point,
    },

    /// Objective evaluation failed.
    Failed {
        /// The x value where evaluation failed.
        x: f64,

        /// The other interior point.
        other: Point,

        /// The evaluation error.
        error: &'a EvalError<E>,
    },
}

impl<E> Event<'_, E> {
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the other interior point.
    #[must_use]
    pub fn other(&self) -> Point {
        match self {
            Self::Evaluated { other, .. } | Self::Failed { other, .. } => *other,
        }
    }

    /// Returns the evaluated point, or `None` if evaluation failed.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Evaluated { point, .. } => Some(*point),
            Self::Failed { .. } => None,
        }
    }
}
