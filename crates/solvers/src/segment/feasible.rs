use segment_lp_core::{Bound, EqualityConstraint, Point, Relation};
use tracing::debug;

use super::{Config, Error, endpoints};

/// The part of the equality segment that satisfies every bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// End nearest corner `A`.
    pub start: Point,

    /// End nearest corner `B`.
    pub end: Point,

    /// Positions of `start` and `end` along `A → B`, where `0` is `A` and `1` is `B`.
    pub span: [f64; 2],
}

impl Segment {
    /// Returns true if the sub-segment is the whole equality segment.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_whole(&self) -> bool {
        self.span == [0.0, 1.0]
    }

    /// Returns true if the sub-segment is a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// Clips the equality segment against every bound.
///
/// Each bound's expression varies linearly along `A → B`, so each bound keeps
/// a closed interval of the segment. The result is their intersection, or
/// `None` when it is empty.
///
/// # Errors
///
/// Returns [`Error::DegenerateConstraint`] under the same conditions as
/// [`endpoints`].
pub fn feasible_segment(
    equality: &EqualityConstraint,
    bounds: &[Bound],
    config: &Config,
) -> Result<Option<Segment>, Error> {
    let [a, b] = endpoints(equality)?;
    let tol = config.feasibility_tol();

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;

    for bound in bounds {
        let at_a = bound.expr.eval(a.point);
        let slope = bound.expr.eval(b.point) - at_a;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            if bound.accepts(at_a, tol) {
                continue;
            }
            lo = 1.0;
            hi = 0.0;
            break;
        }

        let threshold = match bound.relation {
            Relation::AtLeast => bound.threshold - tol,
            Relation::AtMost => bound.threshold + tol,
        };
        let crossing = (threshold - at_a) / slope;

        // A NaN comparison never holds, so such a bound admits no point.
        if crossing.is_nan() {
            lo = 1.0;
            hi = 0.0;
            break;
        }

        // AtLeast keeps the side where the value grows, AtMost the other.
        let keeps_upper = (bound.relation == Relation::AtLeast) == (slope > 0.0);
        if keeps_upper {
            lo = lo.max(crossing);
        } else {
            hi = hi.min(crossing);
        }
    }

    if lo > hi {
        debug!(
            component = "segment",
            operation = "feasible_segment",
            status = "empty",
            "Bounds leave no feasible sub-segment"
        );
        return Ok(None);
    }

    let segment = Segment {
        start: lerp(a.point, b.point, lo),
        end: lerp(a.point, b.point, hi),
        span: [lo, hi],
    };

    debug!(
        component = "segment",
        operation = "feasible_segment",
        status = "success",
        lo,
        hi,
        "Clipped segment against bounds"
    );

    Ok(Some(segment))
}

/// Interpolates so that `t = 0` and `t = 1` reproduce the endpoints exactly.
fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(
        (1.0 - t) * a.x1 + t * b.x1,
        (1.0 - t) * a.x2 + t * b.x2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use segment_lp_core::{Goal, LinearExpr};

    use crate::segment::{Status, optimize_unobserved};

    fn vitamin_c() -> LinearExpr {
        LinearExpr::new(8.8, 5.2)
    }

    #[test]
    fn fruit_problem_is_wholly_feasible() {
        let bounds = [
            Bound::at_least(vitamin_c(), 20.0),
            Bound::at_most(vitamin_c(), 60.0),
        ];

        let segment = feasible_segment(&EqualityConstraint::sum(5.0), &bounds, &Config::default())
            .expect("valid segment")
            .expect("non-empty");

        assert!(segment.is_whole());
        assert_eq!(segment.start, Point::new(0.0, 5.0));
        assert_eq!(segment.end, Point::new(5.0, 0.0));
    }

    #[test]
    fn bound_cuts_segment_partway() {
        // Vitamin C runs from 26 at A to 44 at B; requiring at least 35 keeps
        // the half nearest B.
        let bounds = [Bound::at_least(vitamin_c(), 35.0)];

        let segment = feasible_segment(&EqualityConstraint::sum(5.0), &bounds, &Config::default())
            .expect("valid segment")
            .expect("non-empty");

        assert_relative_eq!(segment.span[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(segment.span[1], 1.0);
        assert_relative_eq!(segment.start.x1, 2.5, epsilon = 1e-12);
        assert_relative_eq!(segment.start.x2, 2.5, epsilon = 1e-12);
        assert_relative_eq!(vitamin_c().eval(segment.start), 35.0, epsilon = 1e-9);
        assert_eq!(segment.end, Point::new(5.0, 0.0));
    }

    #[test]
    fn upper_bound_keeps_side_nearest_a() {
        let bounds = [Bound::at_most(vitamin_c(), 35.0)];

        let segment = feasible_segment(&EqualityConstraint::sum(5.0), &bounds, &Config::default())
            .expect("valid segment")
            .expect("non-empty");

        assert_relative_eq!(segment.span[0], 0.0);
        assert_relative_eq!(segment.span[1], 0.5, epsilon = 1e-12);
        assert_eq!(segment.start, Point::new(0.0, 5.0));
    }

    #[test]
    fn excluding_bound_empties_segment() {
        let bounds = [Bound::at_least(vitamin_c(), 100.0)];

        let segment = feasible_segment(&EqualityConstraint::sum(5.0), &bounds, &Config::default())
            .expect("valid segment");

        assert!(segment.is_none());
    }

    #[test]
    fn bounds_that_disagree_empty_segment() {
        let bounds = [
            Bound::at_least(vitamin_c(), 40.0),
            Bound::at_most(vitamin_c(), 30.0),
        ];

        let segment = feasible_segment(&EqualityConstraint::sum(5.0), &bounds, &Config::default())
            .expect("valid segment");

        assert!(segment.is_none());
    }

    #[test]
    fn constant_bound_along_segment() {
        // x1 + x2 is 5 everywhere on the segment.
        let total = LinearExpr::new(1.0, 1.0);
        let equality = EqualityConstraint::sum(5.0);

        let kept = feasible_segment(&equality, &[Bound::at_most(total, 5.0)], &Config::default())
            .expect("valid segment");
        assert!(kept.is_some_and(|segment| segment.is_whole()));

        let dropped = feasible_segment(&equality, &[Bound::at_most(total, 4.0)], &Config::default())
            .expect("valid segment");
        assert!(dropped.is_none());
    }

    #[test]
    fn single_point_segment() {
        let bounds = [
            Bound::at_least(vitamin_c(), 35.0),
            Bound::at_most(vitamin_c(), 35.0),
        ];

        let segment = feasible_segment(&EqualityConstraint::sum(5.0), &bounds, &Config::default())
            .expect("valid segment")
            .expect("non-empty");

        assert!(segment.is_point());
    }

    #[test]
    fn nan_bound_admits_no_point() {
        let equality = EqualityConstraint::sum(5.0);
        let cases = [
            Bound::at_least(vitamin_c(), f64::NAN),
            Bound::at_most(vitamin_c(), f64::NAN),
            Bound::at_least(LinearExpr::new(f64::NAN, 5.2), 20.0),
            Bound::at_most(LinearExpr::new(1.0, 1.0).with_constant(f64::NAN), 60.0),
        ];

        for bound in cases {
            let bounds = [bound];
            let segment = feasible_segment(&equality, &bounds, &Config::default())
                .expect("valid segment");
            assert!(segment.is_none(), "{bound:?} kept {segment:?}");

            let solution = optimize_unobserved(
                &equality,
                &bounds,
                &LinearExpr::new(5.0, 10.0),
                Goal::Minimize,
                &Config::default(),
            )
            .expect("valid segment");
            assert_eq!(solution.status, Status::Infeasible);
        }
    }

    #[test]
    fn infinite_thresholds_agree_with_bound_checks() {
        let equality = EqualityConstraint::sum(5.0);

        let open = [Bound::at_most(vitamin_c(), f64::INFINITY)];
        let kept = feasible_segment(&equality, &open, &Config::default()).expect("valid segment");
        assert!(kept.is_some_and(|segment| segment.is_whole()));

        let closed = [Bound::at_least(vitamin_c(), f64::INFINITY)];
        let dropped =
            feasible_segment(&equality, &closed, &Config::default()).expect("valid segment");
        assert!(dropped.is_none());
    }

    #[test]
    fn degenerate_equality_is_an_error() {
        let equality = EqualityConstraint::new(LinearExpr::new(0.0, 0.0), 5.0);
        assert!(matches!(
            feasible_segment(&equality, &[], &Config::default()),
            Err(Error::DegenerateConstraint { .. })
        ));
    }
}
