/// Defines the optimization direction.
///
/// The solver transforms objective values using [`Goal::transform`], allowing
/// it to always minimize internally while supporting both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "lowercase"))]
pub enum Goal {
    /// Minimize the objective function.
    #[default]
    Minimize,

    /// Maximize the objective function.
    Maximize,
}

impl Goal {
    /// Selects [`Goal::Maximize`] when `maximize` is true.
    #[must_use]
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize { Self::Maximize } else { Self::Minimize }
    }

    /// Transforms an objective value for internal minimization.
    ///
    /// - [`Goal::Minimize`]: returns the value unchanged
    /// - [`Goal::Maximize`]: negates the value
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_is_identity() {
        assert_eq!(Goal::Minimize.transform(2.5), 2.5);
        assert_eq!(Goal::Minimize.transform(-1.0), -1.0);
    }

    #[test]
    fn maximize_negates() {
        assert_eq!(Goal::Maximize.transform(2.5), -2.5);
        assert_eq!(Goal::Maximize.transform(f64::INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn from_flag() {
        assert_eq!(Goal::from_maximize(false), Goal::Minimize);
        assert_eq!(Goal::from_maximize(true), Goal::Maximize);
        assert_eq!(Goal::default(), Goal::Minimize);
    }
}
