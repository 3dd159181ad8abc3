use thiserror::Error;

/// Errors reported by the segment solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The equality line cannot be reduced to two finite, non-negative intercepts.
    #[error("degenerate equality constraint: {reason}")]
    DegenerateConstraint { reason: &'static str },

    /// No endpoint satisfies every bound.
    #[error("no endpoint satisfies every bound")]
    Infeasible,
}

impl Error {
    pub(super) fn degenerate(reason: &'static str) -> Self {
        Self::DegenerateConstraint { reason }
    }
}
