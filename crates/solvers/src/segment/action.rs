/// Actions an observer can take while the solver visits the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current endpoint and return the best solution so far.
    StopEarly,

    /// Treat the current endpoint as infeasible even if every bound holds.
    ///
    /// The endpoint stays in [`Solution::evaluations`] but is left out of
    /// [`Solution::feasible`] and cannot become the optimum.
    ///
    /// [`Solution::evaluations`]: super::Solution::evaluations
    /// [`Solution::feasible`]: super::Solution::feasible
    AssumeInfeasible,
}
