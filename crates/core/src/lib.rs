//! Core traits for the goldsect workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a fallible scalar function `ℝ → ℝ` to be optimized
//! - [`Pure`]: lifts an infallible `Fn(f64) -> f64` into an [`Objective`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Objective, Pure};
pub use observer::Observer;
