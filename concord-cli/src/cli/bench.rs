//! Warm-up plus timed trials for one backend.

use std::{num::NonZeroUsize, time::Instant};

use concord_core::{Backend, ComponentsError};
use tracing::debug;

use super::commands::CliError;

/// Component count and wall-clock seconds of each timed trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRun {
    /// Count returned by the warm-up and every trial.
    pub components: usize,
    /// Seconds taken by each trial, in run order.
    pub times: Vec<f64>,
}

/// Runs `count` once untimed, then `trials` more times under a timer.
///
/// # Errors
/// Propagates engine errors and returns [`CliError::InconsistentResults`]
/// when a trial disagrees with the warm-up.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use concord_cli::cli::run_trials;
/// use concord_core::Backend;
///
/// let trials = NonZeroUsize::new(2).expect("non-zero");
/// let run = run_trials(Backend::Sequential, trials, || Ok(7))?;
/// assert_eq!(run.components, 7);
/// assert_eq!(run.times.len(), 2);
/// # Ok::<(), concord_cli::cli::CliError>(())
/// ```
pub fn run_trials(
    backend: Backend,
    trials: NonZeroUsize,
    mut count: impl FnMut() -> Result<usize, ComponentsError>,
) -> Result<TrialRun, CliError> {
    let components = count()?;
    let mut times = Vec::with_capacity(trials.get());
    for trial in 0..trials.get() {
        let start = Instant::now();
        let found = count()?;
        let elapsed = start.elapsed().as_secs_f64();
        if found != components {
            return Err(CliError::InconsistentResults {
                backend,
                expected: components,
                found,
            });
        }
        debug!(%backend, trial, seconds = elapsed, "trial finished");
        times.push(elapsed);
    }
    Ok(TrialRun { components, times })
}
