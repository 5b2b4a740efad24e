use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::core::{Phase, Snapshot};
use crate::error::TortoiseHareError;

/// Successor function of a functional graph
pub type Successor<P> = Box<dyn Fn(&P) -> P>;

/// Steppable Floyd cycle detector
///
/// The detector owns one run's worth of state and advances it one transition
/// per [`CycleDetector::step`] call. Pacing is entirely up to the caller: a
/// timer, a "next" button, or a loop such as [`super::Race`].
///
/// The successor function must lead into a cycle from the configured start.
/// If it never does, the detector stays in [`Phase::Detecting`] forever.
pub struct CycleDetector<P> {
    run: Option<ConfiguredRun<P>>,
}

struct ConfiguredRun<P> {
    successor: Successor<P>,
    state: DetectorState<P>,
}

#[derive(Debug, Clone)]
struct DetectorState<P> {
    phase: Phase,
    start: P,
    slow: P,
    fast: P,
    step_count: usize,
    meeting_point: Option<P>,
    cycle_start: Option<P>,
    cycle_length: Option<NonZeroUsize>,
}

impl<P: Clone> DetectorState<P> {
    fn fresh(start: P) -> Self {
        Self {
            phase: Phase::Detecting,
            slow: start.clone(),
            fast: start.clone(),
            start,
            step_count: 0,
            meeting_point: None,
            cycle_start: None,
            cycle_length: None,
        }
    }

    fn snapshot(&self) -> Snapshot<P> {
        Snapshot {
            phase: self.phase,
            start: self.start.clone(),
            slow: self.slow.clone(),
            fast: self.fast.clone(),
            step_count: self.step_count,
            meeting_point: self.meeting_point.clone(),
            cycle_start: self.cycle_start.clone(),
            cycle_length: self.cycle_length,
        }
    }
}

impl<P> Default for CycleDetector<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for CycleDetector<P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleDetector")
            .field("state", &self.run.as_ref().map(|run| &run.state))
            .finish()
    }
}

impl<P> CycleDetector<P> {
    /// Create an unconfigured detector
    pub fn new() -> Self {
        Self { run: None }
    }

    pub fn is_configured(&self) -> bool {
        self.run.is_some()
    }

    /// Current phase, or `None` before [`CycleDetector::configure`]
    pub fn phase(&self) -> Option<Phase> {
        self.run.as_ref().map(|run| run.state.phase)
    }
}

impl<P> CycleDetector<P>
where
    P: Clone + Eq + fmt::Debug,
{
    /// Start a fresh run over `successor` from `start`
    ///
    /// Any previous run, finished or not, is discarded.
    pub fn configure<F>(&mut self, successor: F, start: P)
    where
        F: Fn(&P) -> P + 'static,
    {
        debug!(?start, "configuring cycle detector");
        self.run = Some(ConfiguredRun {
            successor: Box::new(successor),
            state: DetectorState::fresh(start),
        });
    }

    /// Restart the current run from its original start position
    pub fn reset(&mut self) -> Result<Snapshot<P>, TortoiseHareError> {
        let run = self.run.as_mut().ok_or(TortoiseHareError::NotConfigured)?;
        debug!(start = ?run.state.start, "resetting cycle detector");
        run.state = DetectorState::fresh(run.state.start.clone());
        Ok(run.state.snapshot())
    }

    /// Perform exactly one transition of the current phase
    ///
    /// Stepping a finished run is a no-op that returns the terminal snapshot.
    pub fn step(&mut self) -> Result<Snapshot<P>, TortoiseHareError> {
        let run = self.run.as_mut().ok_or(TortoiseHareError::NotConfigured)?;
        transition(&mut run.state, run.successor.as_ref());
        Ok(run.state.snapshot())
    }

    /// Read-only view of the current state, `None` when unconfigured
    pub fn snapshot(&self) -> Option<Snapshot<P>> {
        self.run.as_ref().map(|run| run.state.snapshot())
    }
}

fn transition<P>(state: &mut DetectorState<P>, next: &dyn Fn(&P) -> P)
where
    P: Clone + Eq + fmt::Debug,
{
    match state.phase {
        Phase::Detecting => {
            state.slow = next(&state.slow);
            state.fast = next(&next(&state.fast));
            state.step_count += 1;
            trace!(slow = ?state.slow, fast = ?state.fast, step = state.step_count, "detecting");

            if state.slow == state.fast {
                debug!(
                    meeting_point = ?state.slow,
                    steps = state.step_count,
                    "pointers met, locating cycle start"
                );
                state.meeting_point = Some(state.slow.clone());
                state.phase = Phase::Locating;
                state.slow = state.start.clone();
                state.step_count = 0;
            }
        }
        Phase::Locating => {
            // The pointers already coincide when the tail is empty, so test
            // before moving.
            if state.slow == state.fast {
                let cycle_start = state.slow.clone();
                debug!(
                    cycle_start = ?cycle_start,
                    tail_length = state.step_count,
                    "found cycle start, measuring cycle"
                );
                state.fast = next(&cycle_start);
                state.cycle_start = Some(cycle_start);
                state.phase = Phase::Measuring;
                state.step_count = 1;
            } else {
                state.slow = next(&state.slow);
                state.fast = next(&state.fast);
                state.step_count += 1;
                trace!(slow = ?state.slow, fast = ?state.fast, step = state.step_count, "locating");
            }
        }
        Phase::Measuring => {
            if state.cycle_start.as_ref() == Some(&state.fast) {
                debug_assert!(state.step_count > 0);
                debug!(cycle_length = state.step_count, "cycle measured");
                state.cycle_length = NonZeroUsize::new(state.step_count);
                state.phase = Phase::Done;
            } else {
                state.fast = next(&state.fast);
                state.step_count += 1;
                trace!(fast = ?state.fast, step = state.step_count, "measuring");
            }
        }
        Phase::Done => {}
    }
}
