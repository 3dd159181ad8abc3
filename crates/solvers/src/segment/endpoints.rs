use segment_lp_core::{Corner, CornerPoint, EqualityConstraint, Point};
use tracing::debug;

use super::Error;

/// Returns the two endpoints of the equality segment, `A` then `B`.
///
/// For `a·x1 + b·x2 = T` the endpoints are the axis intercepts
/// `A = (0, T/b)` and `B = (T/a, 0)`. For `x1 + x2 = T` this is `(0, T)` and
/// `(T, 0)`.
///
/// # Errors
///
/// Returns [`Error::DegenerateConstraint`] if the constraint is non-finite,
/// either coefficient is zero, the coefficients have opposite signs (the line
/// runs off to infinity inside the quadrant), or either intercept is negative.
/// Intercepts are never clipped into the quadrant.
///
/// Opposite signs are rejected even when both intercepts land on the origin:
/// `x1 - x2 = 0` is a ray, not a segment, so it fails rather than returning
/// `(0, 0)` twice.
pub fn endpoints(equality: &EqualityConstraint) -> Result<[CornerPoint; 2], Error> {
    let result = intercepts(equality);

    match &result {
        Ok([a, b]) => debug!(
            component = "segment",
            operation = "endpoints",
            status = "success",
            a_x2 = a.point.x2,
            b_x1 = b.point.x1,
            "Derived segment endpoints"
        ),
        Err(Error::DegenerateConstraint { reason }) => debug!(
            component = "segment",
            operation = "endpoints",
            status = "degenerate",
            reason = *reason,
            "Equality constraint has no segment in the quadrant"
        ),
        Err(Error::Infeasible) => {}
    }

    result
}

fn intercepts(equality: &EqualityConstraint) -> Result<[CornerPoint; 2], Error> {
    if !equality.expr.is_finite() || !equality.total.is_finite() {
        return Err(Error::degenerate("coefficients and total must be finite"));
    }

    let a = equality.expr.x1;
    let b = equality.expr.x2;

    #[allow(clippy::float_cmp)]
    if a == 0.0 && b == 0.0 {
        return Err(Error::degenerate("both coefficients are zero"));
    }

    #[allow(clippy::float_cmp)]
    if a == 0.0 || b == 0.0 {
        return Err(Error::degenerate(
            "line is parallel to an axis and has only one intercept",
        ));
    }

    if (a > 0.0) != (b > 0.0) {
        return Err(Error::degenerate(
            "coefficients have opposite signs, so the line is unbounded in the quadrant",
        ));
    }

    let rhs = equality.rhs();

    // Adding zero folds -0.0 into 0.0.
    let on_x2_axis = Point::new(0.0, rhs / b + 0.0);
    let on_x1_axis = Point::new(rhs / a + 0.0, 0.0);

    if !on_x2_axis.x2.is_finite() || !on_x1_axis.x1.is_finite() {
        return Err(Error::degenerate("intercept overflows to a non-finite value"));
    }

    if !on_x2_axis.is_non_negative() || !on_x1_axis.is_non_negative() {
        return Err(Error::degenerate(
            "segment does not lie in the non-negative quadrant",
        ));
    }

    Ok([
        CornerPoint::new(Corner::A, on_x2_axis),
        CornerPoint::new(Corner::B, on_x1_axis),
    ])
}
