use super::{Error, Evaluation};

/// How the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// At least one endpoint is feasible and the best one is reported.
    Optimal,

    /// No endpoint satisfies every bound.
    Infeasible,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a segment solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Every endpoint visited, in listing order.
    pub evaluations: Vec<Evaluation>,

    /// The visited endpoints accepted as feasible, in listing order.
    pub feasible: Vec<Evaluation>,

    /// The best feasible endpoint, or `None` if there is none.
    pub optimal: Option<Evaluation>,
}

impl Solution {
    /// Returns true if the solver found an optimum.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Consumes the solution and returns the optimal endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Infeasible`] if no feasible endpoint was found,
    /// including when an observer stopped the solver before reaching one.
    pub fn into_optimal(self) -> Result<Evaluation, Error> {
        self.optimal.ok_or(Error::Infeasible)
    }
}
