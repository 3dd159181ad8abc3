//! Observer that records endpoint evaluations as `tracing` events.

use segment_lp_core::Observer;
use tracing::info;

use crate::traits::{HasCorner, HasFeasibility, HasObjective};

/// Emits one `INFO` event per endpoint and never steers the solver.
///
/// Each event carries the problem name, the corner label and coordinates, the
/// objective, and whether every bound holds. Install any `tracing` subscriber
/// to see them.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    problem: &'static str,
    events: usize,
}

impl TracingObserver {
    /// Creates an observer that tags every event with `problem`.
    #[must_use]
    pub fn new(problem: &'static str) -> Self {
        Self { problem, events: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasCorner + HasObjective + HasFeasibility,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        let corner = event.corner();

        info!(
            problem = self.problem,
            corner = corner.label(),
            x1 = corner.x1(),
            x2 = corner.x2(),
            objective = event.objective(),
            feasible = event.is_feasible(),
            "Endpoint evaluated"
        );

        None
    }
}

impl<E, A> Observer<E, A> for &mut TracingObserver
where
    E: HasCorner + HasObjective + HasFeasibility,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
