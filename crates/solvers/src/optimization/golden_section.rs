//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval `[a, b]`. It maintains two interior points positioned
//! by the golden ratio,
//!
//! ```text
//! c = b - (b - a) / φ
//! d = a + (b - a) / φ
//! ```
//!
//! compares their objectives, and shrinks the bracket toward the better point.
//! One interior point always survives into the next bracket, so every
//! iteration after the first needs exactly one new evaluation.
//!
//! The search stops once `b - a <= tol`. The reported solution is the midpoint
//! of the final bracket together with the objective evaluated there. If the
//! initial bracket is already within tolerance, no interior point is
//! evaluated at all.
//!
//! When both interior points have exactly the same objective, the solver keeps
//! the left sub-interval `[a, d]`, for minimization and maximization alike.
//!
//! # When to Use
//!
//! Golden section search is appropriate when:
//! - The objective function is unimodal (single optimum) on the bracket
//! - Derivative information is unavailable or expensive
//! - Function evaluations are relatively cheap
//!
//! # Limitations
//!
//! - **Single variable only**
//! - **Derivative-free**: Slower convergence than gradient-based methods
//! - **Unimodal assumption**: May find a local optimum, or drift to a bound,
//!   if the objective has several extrema or none inside the bracket.
//!   Maximizing a convex function, for example, converges to whichever end of
//!   the bracket has the larger value.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per interior evaluation after the first:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::Failed`]: the objective returned an error or NaN
//!
//! Each event includes `other`, the opposite interior point. During
//! **initialization** the solver evaluates two points but emits only one
//! event (for the second point), since the first has no `other` yet. The final
//! evaluation at the midpoint is not observed.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other` (useful for
//! error recovery or steering the search away from a region). Without one of
//! these actions, a failed evaluation ends the search with an [`Error`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use goldsect_core::{Objective, Observer};

use super::Goal;
use search::golden_search;

/// Locates the extremum of `objective` on `[a, b]` to within `tol`.
///
/// This is the plain entry point: no observer and the default iteration cap.
/// The returned [`Solution`] holds the midpoint of the final bracket and the
/// objective value there.
///
/// # Errors
///
/// - [`Error::InvalidInterval`] if `a >= b` or either bound is not finite
/// - [`Error::Config`] if `tol` is not positive and finite
/// - [`Error::Evaluation`] if the objective fails at a probed point
pub fn search<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    tol: f64,
    goal: Goal,
) -> Result<Solution, Error> {
    let config = Config::new(tol, DEFAULT_MAX_ITERS)?;
    golden_search(objective, bracket, &config, (), goal)
}

/// Finds the minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the objective fails
/// during evaluation and the observer does not return [`Action::AssumeWorse`]
/// to recover.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    golden_search(objective, bracket, config, observer, Goal::Minimize)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the objective fails
/// during evaluation and the observer does not return [`Action::AssumeWorse`]
/// to recover.
pub fn maximize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    golden_search(objective, bracket, config, observer, Goal::Maximize)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    maximize(objective, bracket, config, ())
}

/// Runs golden section search toward a goal chosen at runtime.
///
/// # Errors
///
/// Same as [`minimize`] and [`maximize`].
pub fn optimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
    goal: Goal,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    golden_search(objective, bracket, config, observer, goal)
}
