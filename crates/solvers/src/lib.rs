//! Numerical solvers for the goldsect workspace.
//!
//! - [`optimization`]: locating the minimum or maximum of a scalar objective

pub mod optimization;
