#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the `(x1, x2)` decision plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Returns true if both coordinates are non-negative.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.x1 >= 0.0 && self.x2 >= 0.0
    }
}

/// A linear expression `x1·p.x1 + x2·p.x2 + constant`.
///
/// The same type describes objectives, bound left-hand sides, and the
/// left-hand side of the equality constraint. Most expressions have a zero
/// constant; [`LinearExpr::new`] builds one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearExpr {
    /// Coefficient of `x1`.
    pub x1: f64,

    /// Coefficient of `x2`.
    pub x2: f64,

    /// Constant term.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constant: f64,
}

impl LinearExpr {
    /// Creates an expression `a·x1 + b·x2` with no constant term.
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self {
            x1: a,
            x2: b,
            constant: 0.0,
        }
    }

    /// Returns a copy of this expression with the given constant term.
    #[must_use]
    pub const fn with_constant(self, constant: f64) -> Self {
        Self { constant, ..self }
    }

    /// Evaluates the expression at `point`.
    #[must_use]
    pub fn eval(&self, point: Point) -> f64 {
        self.x1 * point.x1 + self.x2 * point.x2 + self.constant
    }

    /// Solves `self = rhs` for `x2` at the given `x1`.
    ///
    /// Returns `None` when the `x2` coefficient is zero, since the line
    /// `self = rhs` is then vertical and not a function of `x1`.
    #[must_use]
    pub fn solve_x2(&self, x1: f64, rhs: f64) -> Option<f64> {
        #[allow(clippy::float_cmp)]
        if self.x2 == 0.0 {
            return None;
        }
        Some((rhs - self.constant - self.x1 * x1) / self.x2)
    }

    /// Returns true if every coefficient and the constant are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.x2.is_finite() && self.constant.is_finite()
    }
}
