//! Bounded driver for a [`CycleDetector`]

use std::fmt;

use serde::Serialize;
use tracing::info;

use super::CycleDetector;
use crate::core::{PhaseTally, Snapshot};
use crate::error::TortoiseHareError;

/// Result of driving a detector to [`crate::core::Phase::Done`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceOutcome<P> {
    /// Terminal snapshot
    pub snapshot: Snapshot<P>,
    /// Steps spent in each phase during this race
    pub tally: PhaseTally,
    /// Every snapshot observed, starting with the one before the first step
    pub trace: Option<Vec<Snapshot<P>>>,
}

/// Drives a detector to completion under a step ceiling
///
/// The detector cannot tell a long tail from a successor function that never
/// cycles, so the ceiling is the caller's guard against the latter.
#[derive(Debug, Clone, Copy)]
pub struct Race {
    max_steps: usize,
    keep_trace: bool,
}

impl Race {
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps,
            keep_trace: false,
        }
    }

    pub fn with_trace(mut self, keep_trace: bool) -> Self {
        self.keep_trace = keep_trace;
        self
    }

    /// Step `detector` until it is done
    pub fn run<P>(&self, detector: &mut CycleDetector<P>) -> Result<RaceOutcome<P>, TortoiseHareError>
    where
        P: Clone + Eq + fmt::Debug,
    {
        self.run_observed(detector, |_| {})
    }

    /// Step `detector` until it is done, handing every new snapshot to
    /// `on_step`
    ///
    /// The race resumes from wherever the detector currently is; a finished
    /// detector yields its terminal snapshot without stepping.
    pub fn run_observed<P, F>(
        &self,
        detector: &mut CycleDetector<P>,
        mut on_step: F,
    ) -> Result<RaceOutcome<P>, TortoiseHareError>
    where
        P: Clone + Eq + fmt::Debug,
        F: FnMut(&Snapshot<P>),
    {
        let mut current = detector.snapshot().ok_or(TortoiseHareError::NotConfigured)?;
        let mut tally = PhaseTally::default();
        let mut trace = self.keep_trace.then(|| vec![current.clone()]);

        while !current.is_done() {
            if tally.total() >= self.max_steps {
                return Err(TortoiseHareError::StepLimitExceeded {
                    limit: self.max_steps,
                    phase: current.phase,
                });
            }

            let phase = current.phase;
            current = detector.step()?;
            tally.record(phase);
            on_step(&current);

            if let Some(trace) = trace.as_mut() {
                trace.push(current.clone());
            }
        }

        info!(
            cycle_start = ?current.cycle_start,
            cycle_length = ?current.cycle_length(),
            steps = tally.total(),
            "race finished"
        );

        Ok(RaceOutcome {
            snapshot: current,
            tally,
            trace,
        })
    }
}
