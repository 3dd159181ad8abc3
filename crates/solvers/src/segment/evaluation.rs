use segment_lp_core::CornerPoint;

use super::BoundCheck;

/// An endpoint with its objective value and bound checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The evaluated endpoint.
    pub corner: CornerPoint,

    /// The objective value at the endpoint.
    pub objective: f64,

    /// One check per bound, in bound order.
    pub bounds: Vec<BoundCheck>,
}

impl Evaluation {
    /// Returns true if every bound holds at this endpoint.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.bounds.iter().all(|check| check.satisfied)
    }

    /// Returns the first bound that does not hold, if any.
    #[must_use]
    pub fn first_violation(&self) -> Option<&BoundCheck> {
        self.bounds.iter().find(|check| !check.satisfied)
    }
}
