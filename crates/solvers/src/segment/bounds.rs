use segment_lp_core::{Bound, Point};
use tracing::trace;

use super::Config;

/// The value of one bound's expression at a point, and whether it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundCheck {
    /// Position of the bound in the list passed to [`evaluate_bounds`].
    pub index: usize,

    /// The bound's expression evaluated at the point.
    pub value: f64,

    /// Whether the value is on the accepted side of the threshold.
    pub satisfied: bool,
}

/// Checks each bound at `point`, in order.
///
/// A bound is satisfied when `value ≥ threshold` (`AtLeast`) or
/// `value ≤ threshold` (`AtMost`), widened by [`Config::feasibility_tol`].
#[must_use]
pub fn evaluate_bounds(point: Point, bounds: &[Bound], config: &Config) -> Vec<BoundCheck> {
    let tol = config.feasibility_tol();

    bounds
        .iter()
        .enumerate()
        .map(|(index, bound)| {
            let value = bound.expr.eval(point);
            let satisfied = bound.accepts(value, tol);

            trace!(
                component = "segment",
                operation = "evaluate_bounds",
                index,
                value,
                threshold = bound.threshold,
                satisfied,
                "Checked bound"
            );

            BoundCheck {
                index,
                value,
                satisfied,
            }
        })
        .collect()
}
