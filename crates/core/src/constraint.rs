#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LinearExpr, Point};

/// An equality constraint `expr = total` that reduces the problem to a line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EqualityConstraint {
    pub expr: LinearExpr,
    pub total: f64,
}

impl EqualityConstraint {
    /// Creates the constraint `expr = total`.
    #[must_use]
    pub const fn new(expr: LinearExpr, total: f64) -> Self {
        Self { expr, total }
    }

    /// Creates the constraint `x1 + x2 = total`.
    #[must_use]
    pub const fn sum(total: f64) -> Self {
        Self::new(LinearExpr::new(1.0, 1.0), total)
    }

    /// Returns the right-hand side once the constant term is moved across.
    #[must_use]
    pub fn rhs(&self) -> f64 {
        self.total - self.expr.constant
    }

    /// Solves the constraint for `x2` at the given `x1`.
    ///
    /// Returns `None` when the line is vertical.
    #[must_use]
    pub fn x2_at(&self, x1: f64) -> Option<f64> {
        self.expr.solve_x2(x1, self.total)
    }
}

/// Direction of a [`Bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relation {
    /// `expr ≥ threshold`.
    AtLeast,
    /// `expr ≤ threshold`.
    AtMost,
}

/// A linear inequality `expr ≥ threshold` or `expr ≤ threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bound {
    pub expr: LinearExpr,
    pub relation: Relation,
    pub threshold: f64,
}

impl Bound {
    /// Creates the bound `expr ≥ threshold`.
    #[must_use]
    pub const fn at_least(expr: LinearExpr, threshold: f64) -> Self {
        Self {
            expr,
            relation: Relation::AtLeast,
            threshold,
        }
    }

    /// Creates the bound `expr ≤ threshold`.
    #[must_use]
    pub const fn at_most(expr: LinearExpr, threshold: f64) -> Self {
        Self {
            expr,
            relation: Relation::AtMost,
            threshold,
        }
    }

    /// Returns true if `value` satisfies the bound within `tol`.
    ///
    /// A positive `tol` widens the accepted side of the boundary.
    #[must_use]
    pub fn accepts(&self, value: f64, tol: f64) -> bool {
        match self.relation {
            Relation::AtLeast => value >= self.threshold - tol,
            Relation::AtMost => value <= self.threshold + tol,
        }
    }

    /// Returns true if `point` satisfies the bound within `tol`.
    #[must_use]
    pub fn contains(&self, point: Point, tol: f64) -> bool {
        self.accepts(self.expr.eval(point), tol)
    }

    /// Solves the boundary line `expr = threshold` for `x2` at the given `x1`.
    ///
    /// Returns `None` when the boundary is vertical.
    #[must_use]
    pub fn boundary_x2_at(&self, x1: f64) -> Option<f64> {
        self.expr.solve_x2(x1, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sum_constraint_line() {
        let equality = EqualityConstraint::sum(5.0);
        assert_relative_eq!(equality.x2_at(0.0).unwrap(), 5.0);
        assert_relative_eq!(equality.x2_at(2.0).unwrap(), 3.0);
        assert_relative_eq!(equality.x2_at(7.0).unwrap(), -2.0);
    }

    #[test]
    fn rhs_moves_constant_across() {
        let equality = EqualityConstraint::new(LinearExpr::new(1.0, 1.0).with_constant(1.0), 6.0);
        assert_relative_eq!(equality.rhs(), 5.0);
        assert_relative_eq!(equality.x2_at(0.0).unwrap(), 5.0);
    }

    #[test]
    fn bound_relations() {
        let vitamin_c = LinearExpr::new(8.8, 5.2);
        let min = Bound::at_least(vitamin_c, 20.0);
        let max = Bound::at_most(vitamin_c, 60.0);

        let a = Point::new(0.0, 5.0);
        assert!(min.contains(a, 0.0));
        assert!(max.contains(a, 0.0));

        let far = Point::new(10.0, 0.0);
        assert!(min.contains(far, 0.0));
        assert!(!max.contains(far, 0.0));
    }

    #[test]
    fn boundary_is_inclusive() {
        let bound = Bound::at_least(LinearExpr::new(1.0, 0.0), 2.0);
        assert!(bound.accepts(2.0, 0.0));
        assert!(!bound.accepts(1.999, 0.0));
        assert!(bound.accepts(1.999, 0.01));
    }

    #[test]
    fn boundary_line_for_plotting() {
        let min = Bound::at_least(LinearExpr::new(8.8, 5.2), 20.0);
        assert_relative_eq!(min.boundary_x2_at(0.0).unwrap(), 20.0 / 5.2);

        let vertical = Bound::at_most(LinearExpr::new(1.0, 0.0), 3.0);
        assert!(vertical.boundary_x2_at(0.0).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bounds_load_from_json() {
        let json = r#"[
            { "expr": { "x1": 8.8, "x2": 5.2 }, "relation": "at_least", "threshold": 20.0 },
            { "expr": { "x1": 8.8, "x2": 5.2 }, "relation": "at_most", "threshold": 60.0 }
        ]"#;

        let bounds: Vec<Bound> = serde_json::from_str(json).expect("valid bounds");
        let vitamin_c = LinearExpr::new(8.8, 5.2);

        assert_eq!(
            bounds,
            vec![Bound::at_least(vitamin_c, 20.0), Bound::at_most(vitamin_c, 60.0)]
        );
    }
}
