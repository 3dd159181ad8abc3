use segment_lp_core::{Bound, EqualityConstraint, Goal, LinearExpr, Observer};
use tracing::debug;

use super::{
    Action, Config, Error, Evaluation, Event, Solution, Status, endpoints, evaluate_bounds,
};

/// Visits both endpoints and keeps the best feasible one.
pub(super) fn search<Obs>(
    equality: &EqualityConstraint,
    bounds: &[Bound],
    objective: &LinearExpr,
    goal: Goal,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let corners = endpoints(equality)?;

    let mut evaluations = Vec::with_capacity(corners.len());
    let mut feasible: Vec<Evaluation> = Vec::with_capacity(corners.len());
    let mut best: Option<usize> = None;

    for corner in corners {
        let eval = Evaluation {
            corner,
            objective: objective.eval(corner.point),
            bounds: evaluate_bounds(corner.point, bounds, config),
        };

        let event = Event {
            evaluation: &eval,
            best: best.map(|i| &feasible[i]),
        };
        let action = observer.observe(&event);

        let accepted = eval.is_feasible() && action != Some(Action::AssumeInfeasible);

        debug!(
            component = "segment",
            operation = "evaluate_corner",
            corner = corner.label(),
            x1 = corner.point.x1,
            x2 = corner.point.x2,
            objective = eval.objective,
            accepted,
            "Evaluated corner"
        );

        if accepted {
            let improves = best.is_none_or(|i| goal.improves(eval.objective, feasible[i].objective));
            feasible.push(eval.clone());
            if improves {
                best = Some(feasible.len() - 1);
            }
        }
        evaluations.push(eval);

        if action == Some(Action::StopEarly) {
            return Ok(finish(
                Status::StoppedByObserver,
                evaluations,
                feasible,
                best,
            ));
        }
    }

    let status = if best.is_some() {
        Status::Optimal
    } else {
        Status::Infeasible
    };

    Ok(finish(status, evaluations, feasible, best))
}

fn finish(
    status: Status,
    evaluations: Vec<Evaluation>,
    feasible: Vec<Evaluation>,
    best: Option<usize>,
) -> Solution {
    let optimal = best.map(|i| feasible[i].clone());

    debug!(
        component = "segment",
        operation = "optimize",
        status = ?status,
        evaluated = evaluations.len(),
        feasible = feasible.len(),
        optimal = optimal.as_ref().map(|eval| eval.corner.label()),
        objective = optimal.as_ref().map(|eval| eval.objective),
        "Finished segment search"
    );

    Solution {
        status,
        evaluations,
        feasible,
        optimal,
    }
}
