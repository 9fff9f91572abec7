use std::error::Error;

use goldsect_core::Observer;
use goldsect_solvers::optimization::golden_section::{Action, Event};
use tracing::{debug, warn};

/// Logs every golden section event through `tracing`.
///
/// Successful evaluations are logged at `debug`, failures at `warn`.
/// This observer never steers the solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

impl<E: Error> Observer<Event<'_, E>, Action> for LogEvents {
    fn observe(&mut self, event: &Event<'_, E>) -> Option<Action> {
        match event {
            Event::Evaluated { point, other } => debug!(
                x = point.x,
                objective = point.objective,
                other_x = other.x,
                other_objective = other.objective,
                "evaluated"
            ),
            Event::Failed { x, other, error } => warn!(
                x = *x,
                other_x = other.x,
                error = %error,
                "evaluation failed"
            ),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use goldsect_core::Pure;
    use goldsect_solvers::optimization::golden_section::{Config, minimize};

    #[test]
    fn logging_does_not_change_the_search() {
        let objective = Pure(|x: f64| (x - 1.0).powi(2));
        let config = Config::default();

        let logged = minimize(&objective, [-3.0, 3.0], &config, LogEvents).unwrap();
        let silent = minimize(&objective, [-3.0, 3.0], &config, ()).unwrap();

        assert_eq!(logged, silent);
    }
}
