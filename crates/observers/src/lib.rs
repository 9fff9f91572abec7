//! Reusable observers for goldsect solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solver event and action types.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasX`], [`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogEvents`]: emits every event through `tracing`
//! - [`History`]: records every evaluated `(x, objective)` pair
//! - [`EvalBudget`]: stops the solver after a fixed number of evaluations
//!
//! [`Observer`]: goldsect_core::Observer
//! [`HasX`]: traits::HasX
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod budget;
mod history;
mod log;

pub use budget::EvalBudget;
pub use history::History;
pub use log::LogEvents;
