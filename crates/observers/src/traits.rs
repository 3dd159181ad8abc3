//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written against them works with any solver whose events and
//! actions implement them.
//!
//! # Event traits
//!
//! - [`HasCorner`] — events tied to a labeled endpoint
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasFeasibility`] — events that know whether every bound holds
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeInfeasible`] — actions that can exclude an endpoint
//!
//! # Example
//!
//! ```rust
//! use segment_lp_core::Observer;
//! use segment_lp_observers::traits::{CanAssumeInfeasible, HasObjective};
//!
//! /// Rejects any endpoint that costs more than the budget.
//! struct Budget {
//!     limit: f64,
//! }
//!
//! impl<E: HasObjective, A: CanAssumeInfeasible> Observer<E, A> for Budget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() > self.limit).then(A::assume_infeasible)
//!     }
//! }
//! ```

use segment_lp_core::CornerPoint;
use segment_lp_solvers::segment;

/// An event tied to one endpoint of the segment.
pub trait HasCorner {
    /// Returns the endpoint this event describes.
    fn corner(&self) -> CornerPoint;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that knows whether every bound holds.
pub trait HasFeasibility {
    /// Returns true if every bound holds.
    fn is_feasible(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can exclude the current endpoint.
pub trait CanAssumeInfeasible {
    /// Returns the action that treats the current endpoint as infeasible.
    fn assume_infeasible() -> Self;
}

// --- segment::Event ---

impl HasCorner for segment::Event<'_> {
    fn corner(&self) -> CornerPoint {
        self.evaluation.corner
    }
}

impl HasObjective for segment::Event<'_> {
    fn objective(&self) -> f64 {
        self.evaluation.objective
    }
}

impl HasFeasibility for segment::Event<'_> {
    fn is_feasible(&self) -> bool {
        self.evaluation.is_feasible()
    }
}

// --- segment::Action ---

impl CanStopEarly for segment::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeInfeasible for segment::Action {
    fn assume_infeasible() -> Self {
        Self::AssumeInfeasible
    }
}
