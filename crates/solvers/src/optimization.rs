//! Solvers for optimization problems: minimizing or maximizing an objective.
//!
//! An [`Objective`] maps a single real variable `x` to a scalar value.
//! Solvers in this module search for the `x` that minimizes or maximizes it.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search over a bracketed interval for
//!   unimodal functions
//!
//! [`Objective`]: goldsect_core::Objective

mod evaluate;
mod goal;
mod negate;

pub use evaluate::{EvalError, evaluate};
pub use goal::Goal;
pub use negate::NegateObjective;

pub mod golden_section;
