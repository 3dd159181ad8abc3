#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines the optimization direction.
///
/// Solvers transform objective values using [`Goal::transform`], allowing them
/// to always minimize internally while supporting both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Goal {
    /// Minimize the objective.
    #[default]
    Minimize,

    /// Maximize the objective.
    Maximize,
}

impl Goal {
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

    /// Returns true if `candidate` is strictly better than `incumbent`.
    ///
    /// Equal values are not an improvement, so the first of several tied
    /// candidates is kept.
    #[inline]
    #[must_use]
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        self.transform(candidate) < self.transform(incumbent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_prefers_lower() {
        assert!(Goal::Minimize.improves(25.0, 50.0));
        assert!(!Goal::Minimize.improves(50.0, 25.0));
    }

    #[test]
    fn maximize_prefers_higher() {
        assert!(Goal::Maximize.improves(50.0, 25.0));
        assert!(!Goal::Maximize.improves(25.0, 50.0));
    }

    #[test]
    fn ties_do_not_improve() {
        assert!(!Goal::Minimize.improves(10.0, 10.0));
        assert!(!Goal::Maximize.improves(10.0, 10.0));
    }
}
