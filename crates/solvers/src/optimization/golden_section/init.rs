use goldsect_core::{Objective, Observer};

use crate::optimization::{EvalError, Goal, evaluate};

use super::{Action, Error, Event, Point, bracket::GoldenBracket, state::State};

pub(super) enum InitResult {
    Continue(State),
    StopEarly,
}

/// Initialize state by evaluating both interior points.
///
/// Only the second point (or failure) triggers an observer event.
/// This is intentional: we need a valid `other` point for the event.
///
/// If both evaluations fail, we emit one failure event (with a synthetic
/// `other`) for observer awareness, then return an error. Recovery isn't
/// possible: `AssumeWorse` needs one valid point to compare against.
pub(super) fn init<O, Obs>(
    objective: &O,
    bracket: &GoldenBracket,
    observer: &mut Obs,
    goal: Goal,
) -> Result<InitResult, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    let left = evaluate(objective, bracket.inner_left);
    let right = evaluate(objective, bracket.inner_right);

    match (left, right) {
        (Err(left_err), Err(_)) => {
            let synthetic_other = Point::new(bracket.inner_right, f64::NAN);
            observer.observe(&Event::Failed {
                x: bracket.inner_left,
                other: synthetic_other,
                error: &left_err,
            });
            Err(Error::evaluation(bracket.inner_left, left_err))
        }
        (Ok(left_value), Ok(right_value)) => {
            let left_pt = Point::new(bracket.inner_left, left_value);
            let right_pt = Point::new(bracket.inner_right, right_value);
            let event = Event::Evaluated {
                point: right_pt,
                other: left_pt,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(InitResult::StopEarly),
                Some(Action::AssumeWorse) => {
                    let worse = Point::assumed_worse(right_pt.x, goal);
                    Ok(InitResult::Continue(State::new(*bracket, left_pt, worse)))
                }
                None => Ok(InitResult::Continue(State::new(*bracket, left_pt, right_pt))),
            }
        }
        (Ok(value), Err(err)) => {
            let ok_pt = Point::new(bracket.inner_left, value);
            one_failed(bracket, ok_pt, bracket.inner_right, err, observer, goal)
        }
        (Err(err), Ok(value)) => {
            let ok_pt = Point::new(bracket.inner_right, value);
            one_failed(bracket, ok_pt, bracket.inner_left, err, observer, goal)
        }
    }
}

fn one_failed<E, Obs>(
    bracket: &GoldenBracket,
    ok_pt: Point,
    failed_x: f64,
    err: EvalError<E>,
    observer: &mut Obs,
    goal: Goal,
) -> Result<InitResult, Error>
where
    E: std::error::Error + Send + Sync + 'static,
    Obs: for<'a> Observer<Event<'a, E>, Action>,
{
    let action = observer.observe(&Event::Failed {
        x: failed_x,
        other: ok_pt,
        error: &err,
    });

    match action {
        Some(Action::StopEarly) => Ok(InitResult::StopEarly),
        Some(Action::AssumeWorse) => {
            let worse = Point::assumed_worse(failed_x, goal);
            let (left_pt, right_pt) = if ok_pt.x < worse.x {
                (ok_pt, worse)
            } else {
                (worse, ok_pt)
            };
            Ok(InitResult::Continue(State::new(*bracket, left_pt, right_pt)))
        }
        None => Err(Error::evaluation(failed_x, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use goldsect_core::Pure;
    use thiserror::Error;

    fn identity() -> Pure<fn(f64) -> f64> {
        Pure(|x| x)
    }

    fn continued(result: InitResult) -> State {
        match result {
            InitResult::Continue(state) => state,
            InitResult::StopEarly => panic!("unexpected stop"),
        }
    }

    #[test]
    fn both_ok_keeps_both_points() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let result =
            init(&identity(), &bracket, &mut (), Goal::Minimize).expect("should succeed");
        let state = continued(result);

        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
        assert_relative_eq!(state.left().objective, bracket.inner_left, epsilon = 1e-10);
        assert_relative_eq!(state.right().x, bracket.inner_right, epsilon = 1e-10);
    }

    #[test]
    fn both_ok_observer_sees_right_point() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut seen = Vec::new();
        let mut observer = |event: &Event<'_, _>| {
            seen.push((event.x(), event.other().x));
            None
        };

        init(&identity(), &bracket, &mut observer, Goal::Minimize).expect("should succeed");

        assert_eq!(seen, vec![(bracket.inner_right, bracket.inner_left)]);
    }

    #[test]
    fn both_ok_observer_can_stop() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |_: &Event<'_, _>| Some(Action::StopEarly);

        let result =
            init(&identity(), &bracket, &mut observer, Goal::Minimize).expect("should succeed");

        assert!(matches!(result, InitResult::StopEarly));
    }

    #[test]
    fn both_ok_observer_can_assume_worse() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |_: &Event<'_, _>| Some(Action::AssumeWorse);

        let result =
            init(&identity(), &bracket, &mut observer, Goal::Minimize).expect("should succeed");
        let state = continued(result);

        // Right was marked AssumeWorse, so right should have infinite objective
        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
    }

    #[test]
    fn assume_worse_when_maximizing_loses_comparison() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |_: &Event<'_, _>| Some(Action::AssumeWorse);

        let state = continued(
            init(&identity(), &bracket, &mut observer, Goal::Maximize).expect("should succeed"),
        );

        assert_eq!(state.right().objective, f64::NEG_INFINITY);
    }

    // --- One failed tests ---

    #[derive(Debug, Error)]
    #[error("fails above {threshold}")]
    struct ThresholdError {
        threshold: f64,
    }

    fn fails_above(threshold: f64) -> impl Fn(f64) -> Result<f64, ThresholdError> {
        move |x| {
            if x > threshold {
                Err(ThresholdError { threshold })
            } else {
                Ok(x)
            }
        }
    }

    #[test]
    fn one_failed_errors_without_observer_action() {
        // Right point (~6.18) fails, left (~3.82) succeeds
        let objective = fails_above(5.0);
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let result = init(&objective, &bracket, &mut (), Goal::Minimize);

        assert!(matches!(result, Err(Error::Evaluation { x, .. }) if x == bracket.inner_right));
    }

    #[test]
    fn one_failed_recovers_with_assume_worse() {
        let objective = fails_above(5.0);
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |event: &Event<'_, _>| {
            if matches!(event, Event::Failed { .. }) {
                Some(Action::AssumeWorse)
            } else {
                None
            }
        };

        let state = continued(
            init(&objective, &bracket, &mut observer, Goal::Minimize).expect("should recover"),
        );

        // Right failed and was assumed worse
        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
    }

    #[test]
    fn left_failed_keeps_points_ordered() {
        // Fails below 5 instead: left (~3.82) fails, right (~6.18) succeeds.
        let objective = |x: f64| {
            if x < 5.0 {
                Err(ThresholdError { threshold: 5.0 })
            } else {
                Ok(x)
            }
        };
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |_: &Event<'_, _>| Some(Action::AssumeWorse);

        let state = continued(
            init(&objective, &bracket, &mut observer, Goal::Minimize).expect("should recover"),
        );

        assert!(state.left().x < state.right().x);
        assert!(state.left().objective.is_infinite());
        assert_relative_eq!(state.right().objective, bracket.inner_right);
    }

    #[test]
    fn one_failed_can_stop_early() {
        let objective = fails_above(5.0);
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |event: &Event<'_, _>| {
            if matches!(event, Event::Failed { .. }) {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let result =
            init(&objective, &bracket, &mut observer, Goal::Minimize).expect("should succeed");

        assert!(matches!(result, InitResult::StopEarly));
    }

    // --- Both failed test ---

    #[test]
    fn both_failed_returns_error() {
        let objective = fails_above(-1.0); // fails everywhere on [0, 10]
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let result = init(&objective, &bracket, &mut (), Goal::Minimize);

        assert!(result.is_err());
    }

    #[test]
    fn both_failed_notifies_observer() {
        let objective = fails_above(-1.0);
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut notified = false;
        let mut observer = |event: &Event<'_, _>| {
            if matches!(event, Event::Failed { .. }) {
                notified = true;
            }
            Some(Action::AssumeWorse)
        };

        let result = init(&objective, &bracket, &mut observer, Goal::Minimize);

        assert!(notified, "observer should be notified when both fail");
        assert!(result.is_err(), "recovery is not possible when both fail");
    }
}
