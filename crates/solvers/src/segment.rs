//! Graphical method for a two-variable linear program on a line segment.
//!
//! # Algorithm
//!
//! An [`EqualityConstraint`] `a·x1 + b·x2 = T` intersected with the
//! non-negative quadrant is a segment between two corner points:
//!
//! - `A = (0, T/b)` on the `x2` axis
//! - `B = (T/a, 0)` on the `x1` axis
//!
//! A linear objective restricted to a segment is monotone along it, so its
//! optimum is attained at an endpoint. The solver evaluates the bounds and
//! the objective at `A` and `B`, discards endpoints that violate any bound,
//! and keeps the better of what remains. Ties go to `A`.
//!
//! # Outcomes
//!
//! - [`Error::DegenerateConstraint`] — the equality line cannot be reduced to
//!   two finite, non-negative intercepts
//! - [`Status::Infeasible`] — neither endpoint satisfies every bound; the
//!   solution has no optimum and [`Solution::into_optimal`] returns
//!   [`Error::Infeasible`]
//!
//! Endpoint rejection is deliberately coarse: a bound may cut the segment
//! partway and leave a feasible interior that [`optimize`] does not report.
//! Use [`feasible_segment`] to clip the segment against the bounds.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per endpoint, in listing order. Observers
//! can return [`Action::StopEarly`] to halt after the current endpoint, or
//! [`Action::AssumeInfeasible`] to exclude it from the optimum.
//!
//! # Plotting
//!
//! [`sample_curve`] produces evenly spaced rows of the equality line and each
//! bound's boundary line for a presentation layer to draw. It carries no
//! feasibility semantics.

mod action;
mod bounds;
mod config;
mod endpoints;
mod error;
mod evaluation;
mod event;
mod feasible;
mod search;
mod solution;

pub mod sample;


pub use action::Action;
pub use bounds::{BoundCheck, evaluate_bounds};
pub use config::{Config, ConfigError};
pub use endpoints::endpoints;
pub use error::Error;
pub use evaluation::Evaluation;
pub use event::Event;
pub use feasible::{Segment, feasible_segment};
pub use sample::{Sample, SampleCurve, Samples, sample_curve};
pub use solution::{Solution, Status};

use segment_lp_core::{Bound, EqualityConstraint, Goal, LinearExpr, Observer};

use search::search;

/// Finds the best feasible endpoint of the equality segment for `goal`.
///
/// The observer receives an [`Event`] for each endpoint.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns [`Error::DegenerateConstraint`] if the equality line does not
/// reduce to a segment in the non-negative quadrant. Infeasibility is not an
/// error here; it is reported through [`Solution::status`].
pub fn optimize<Obs>(
    equality: &EqualityConstraint,
    bounds: &[Bound],
    objective: &LinearExpr,
    goal: Goal,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(equality, bounds, objective, goal, config, observer)
}

/// Finds the best feasible endpoint without observer support.
///
/// This is a convenience wrapper around [`optimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::DegenerateConstraint`] if the equality line does not
/// reduce to a segment in the non-negative quadrant.
pub fn optimize_unobserved(
    equality: &EqualityConstraint,
    bounds: &[Bound],
    objective: &LinearExpr,
    goal: Goal,
    config: &Config,
) -> Result<Solution, Error> {
    optimize(equality, bounds, objective, goal, config, ())
}

/// Finds the feasible endpoint with the lowest objective.
///
/// # Errors
///
/// Returns [`Error::DegenerateConstraint`] if the equality line does not
/// reduce to a segment in the non-negative quadrant.
pub fn minimize<Obs>(
    equality: &EqualityConstraint,
    bounds: &[Bound],
    objective: &LinearExpr,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    optimize(equality, bounds, objective, Goal::Minimize, config, observer)
}

/// Finds the feasible endpoint with the highest objective.
///
/// # Errors
///
/// Returns [`Error::DegenerateConstraint`] if the equality line does not
/// reduce to a segment in the non-negative quadrant.
pub fn maximize<Obs>(
    equality: &EqualityConstraint,
    bounds: &[Bound],
    objective: &LinearExpr,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    optimize(equality, bounds, objective, Goal::Maximize, config, observer)
}
