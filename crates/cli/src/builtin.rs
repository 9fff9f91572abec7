//! Built-in example objectives.

use std::fmt;

use clap::ValueEnum;

/// A built-in objective selectable by name.
///
/// Names come from [`ValueEnum`]: [`Example::value_variants`] lists every
/// example and [`ValueEnum::from_str`] looks one up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Example {
    /// `(x - 2)**2 + 1`, with its minimum at `x = 2`.
    Quadratic,

    /// `(x - 0.5)**2 + sin(3*x)`, a parabola with a ripple.
    Wavy,
}

impl Example {
    /// Returns the example written in the expression language.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Self::Quadratic => "(x - 2)**2 + 1",
            Self::Wavy => "(x - 0.5)**2 + sin(3*x)",
        }
    }

    #[must_use]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Quadratic => (x - 2.0).powi(2) + 1.0,
            Self::Wavy => (x - 0.5).powi(2) + (3.0 * x).sin(),
        }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}
