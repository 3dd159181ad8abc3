use super::Evaluation;

/// Event emitted once per endpoint by the segment solver.
///
/// `best` is the optimum among the endpoints accepted so far, not counting
/// the one in `evaluation`. Observers can compare against it to decide
/// whether to stop early or reject the endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The endpoint just evaluated.
    pub evaluation: &'a Evaluation,

    /// Best feasible endpoint seen before this one.
    pub best: Option<&'a Evaluation>,
}

impl Event<'_> {
    /// Returns the objective value at the evaluated endpoint.
    #[must_use]
    pub fn objective(&self) -> f64 {
        self.evaluation.objective
    }

    /// Returns true if every bound holds at the evaluated endpoint.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.evaluation.is_feasible()
    }
}
