use goldsect_core::{Objective, Observer};
use tracing::{debug, trace};

use crate::optimization::{Goal, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution,
    bracket::GoldenBracket,
    init::{InitResult, init},
    solution::Status,
    state::ShrinkDirection,
};

/// Core golden section search implementation.
///
/// The goal's transform is applied to objective values before comparison,
/// allowing the same algorithm to handle both minimization (identity) and
/// maximization (negation).
pub(super) fn golden_search<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    goal: Goal,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    let bracket = GoldenBracket::new(bracket)?;
    debug!(
        left = bracket.left,
        right = bracket.right,
        tol = config.tol(),
        max_iters = config.max_iters(),
        ?goal,
        "starting golden section search"
    );

    if bracket.width() <= config.tol() {
        return finish(objective, &bracket, Status::Converged, 0, 0);
    }

    let mut state = match init(objective, &bracket, &mut observer, goal)? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly => {
            return finish(objective, &bracket, Status::StoppedByObserver, 0, 2);
        }
    };

    let mut evals = 2;
    let mut iters = 0;

    while !state.is_converged(config.tol()) {
        if iters == config.max_iters() {
            return finish(objective, state.bracket(), Status::MaxIters, iters, evals);
        }
        iters += 1;

        let direction = state.next_action(goal);
        let (eval_x, other) = match direction {
            ShrinkDirection::ShrinkLeft(x) => (x, state.right()),
            ShrinkDirection::ShrinkRight(x) => (x, state.left()),
        };

        evals += 1;
        let point = match eval_and_observe(objective, eval_x, other, &mut observer)? {
            EvalOutcome::Continue(point) => point,
            EvalOutcome::AssumeWorse => Point::assumed_worse(eval_x, goal),
            EvalOutcome::StopEarly => {
                return finish(
                    objective,
                    state.bracket(),
                    Status::StoppedByObserver,
                    iters,
                    evals,
                );
            }
        };

        state.apply(direction, point);
        trace!(
            iter = iters,
            left = state.bracket().left,
            right = state.bracket().right,
            x = point.x,
            objective = point.objective,
            "shrank bracket"
        );
    }

    finish(objective, state.bracket(), Status::Converged, iters, evals)
}

/// Evaluates the objective at the bracket midpoint and builds the solution.
fn finish<O: Objective>(
    objective: &O,
    bracket: &GoldenBracket,
    status: Status,
    iters: usize,
    evals: usize,
) -> Result<Solution, Error> {
    let x = bracket.midpoint();
    let value = evaluate(objective, x).map_err(|e| Error::evaluation(x, e))?;

    debug!(?status, x, objective = value, iters, "golden section search finished");

    Ok(Solution {
        status,
        x,
        objective: value,
        bracket: bracket.bounds(),
        iters,
        evals: evals + 1,
    })
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum EvalOutcome {
    Continue(Point),
    AssumeWorse,
    StopEarly,
}

/// Evaluate at `x`, emit event, and handle observer action.
fn eval_and_observe<O, Obs>(
    objective: &O,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<EvalOutcome, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    match evaluate(objective, x) {
        Ok(value) => {
            let point = Point::new(x, value);
            match observer.observe(&Event::Evaluated { point, other }) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue(point)),
            }
        }
        Err(error) => {
            let action = observer.observe(&Event::Failed {
                x,
                other,
                error: &error,
            });
            match action {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Err(Error::evaluation(x, error)),
            }
        }
    }
}
