use goldsect_core::Observer;
use goldsect_solvers::optimization::golden_section::Point;

use crate::traits::{HasObjective, HasX};

/// Records every observed evaluation.
///
/// Failed evaluations are recorded with a NaN objective.
#[derive(Debug, Clone, Default)]
pub struct History {
    points: Vec<Point>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded points in evaluation order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the recorded point with the lowest objective, ignoring failures.
    #[must_use]
    pub fn lowest(&self) -> Option<Point> {
        self.points
            .iter()
            .filter(|p| !p.objective.is_nan())
            .copied()
            .min_by(|a, b| a.objective.total_cmp(&b.objective))
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<E: HasX + HasObjective, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push(Point::new(event.x(), event.objective()));
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the recorded points can be read after the solve completes.
impl<E: HasX + HasObjective, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use goldsect_core::Pure;
    use goldsect_solvers::optimization::golden_section::{Action, Config, Event, minimize};
    use thiserror::Error;

    #[test]
    fn records_one_point_per_observed_evaluation() {
        let mut history = History::new();
        let objective = Pure(|x: f64| (x - 1.0).powi(2));

        let solution = minimize(&objective, [-3.0, 3.0], &Config::default(), &mut history)
            .expect("should converge");

        // The first initial probe and the final midpoint are not observed.
        assert_eq!(history.points().len(), solution.iters + 1);
        let lowest = history.lowest().unwrap();
        assert_relative_eq!(lowest.x, 1.0, epsilon = 1e-4);
    }

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct Negative;

    #[test]
    fn failures_are_recorded_as_nan() {
        let mut history = History::new();
        let objective = |x: f64| {
            if x < 0.0 {
                Err(Negative)
            } else {
                Ok((x - 0.5).powi(2))
            }
        };

        // Recover from failures so the search keeps going past them.
        let observer = |event: &Event<'_, Negative>| {
            let _: Option<Action> = history.observe(event);
            event.point().is_none().then_some(Action::AssumeWorse)
        };

        let solution = minimize(&objective, [-1.0, 1.0], &Config::default(), observer)
            .expect("should recover");

        let points = history.into_points();
        assert!(points.iter().any(|p| p.objective.is_nan()));
        assert!(points.iter().any(|p| !p.objective.is_nan()));
        assert_relative_eq!(solution.x, 0.5, epsilon = 1e-4);
    }
}
