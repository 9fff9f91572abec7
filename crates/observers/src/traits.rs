//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasX`]: events that carry the evaluated (or attempted) x
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use goldsect_core::Observer;
//! use goldsect_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     threshold: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use goldsect_solvers::optimization::golden_section;

/// An event that carries the x value it concerns.
pub trait HasX {
    /// Returns the evaluated or attempted x.
    fn x(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the other.
    fn assume_worse() -> Self;
}

// --- Event traits for golden_section::Event ---

impl<E> HasX for golden_section::Event<'_, E> {
    fn x(&self) -> f64 {
        golden_section::Event::x(self)
    }
}

impl<E> HasObjective for golden_section::Event<'_, E> {
    fn objective(&self) -> f64 {
        match self {
            golden_section::Event::Evaluated { point, .. } => point.objective,
            golden_section::Event::Failed { .. } => f64::NAN,
        }
    }
}

// --- Action traits for golden_section::Action ---

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
