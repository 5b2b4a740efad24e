//! Core type definitions
//!
//! This module contains the plain data carried between the detector, the
//! bounded runner and the report generators, with minimal logic.

use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

/// Phase of a tortoise-and-hare run
///
/// Phases only move forward, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Slow advances one node and fast two until they meet
    Detecting,
    /// Both pointers advance one node until they meet at the cycle start
    Locating,
    /// Fast walks the cycle once to count its nodes
    Measuring,
    /// Terminal
    Done,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Detecting,
        Phase::Locating,
        Phase::Measuring,
        Phase::Done,
    ];

    pub fn is_done(self) -> bool {
        self == Phase::Done
    }

    /// One-line explanation used by the human report and `replay`
    pub fn description(self) -> &'static str {
        match self {
            Phase::Detecting => {
                "Phase 1: Detection - Slow pointer moves 1 step, fast pointer moves 2 steps"
            }
            Phase::Locating => "Phase 2: Finding cycle start - Both pointers move 1 step",
            Phase::Measuring => "Phase 3: Measuring cycle length - Moving around the cycle",
            Phase::Done => "Algorithm complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Detecting => "detecting",
            Phase::Locating => "locating",
            Phase::Measuring => "measuring",
            Phase::Done => "done",
        };
        f.pad(name)
    }
}

/// Immutable view of a detector's state after a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<P> {
    pub phase: Phase,
    pub start: P,
    pub slow: P,
    pub fast: P,
    /// Steps taken in the current phase
    pub step_count: usize,
    pub meeting_point: Option<P>,
    pub cycle_start: Option<P>,
    pub cycle_length: Option<NonZeroUsize>,
}

impl<P> Snapshot<P> {
    pub fn is_done(&self) -> bool {
        self.phase.is_done()
    }

    pub fn cycle_length(&self) -> Option<usize> {
        self.cycle_length.map(NonZeroUsize::get)
    }
}

/// Number of `step` calls spent in each active phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseTally {
    pub detecting: usize,
    pub locating: usize,
    pub measuring: usize,
}

impl PhaseTally {
    /// Count one step taken while in `phase`
    pub fn record(&mut self, phase: Phase) {
        match phase {
            Phase::Detecting => self.detecting += 1,
            Phase::Locating => self.locating += 1,
            Phase::Measuring => self.measuring += 1,
            Phase::Done => {}
        }
    }

    pub fn total(&self) -> usize {
        self.detecting + self.locating + self.measuring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_is_forward() {
        let mut sorted = Phase::ALL;
        sorted.sort();
        assert_eq!(sorted, Phase::ALL);
    }

    #[test]
    fn test_phase_serializes_snake_case() {
        let json = serde_json::to_string(&Phase::Measuring).unwrap();
        assert_eq!(json, "\"measuring\"");
    }

    #[test]
    fn test_tally_ignores_done() {
        let mut tally = PhaseTally::default();
        tally.record(Phase::Detecting);
        tally.record(Phase::Detecting);
        tally.record(Phase::Locating);
        tally.record(Phase::Done);

        assert_eq!(tally.detecting, 2);
        assert_eq!(tally.locating, 1);
        assert_eq!(tally.measuring, 0);
        assert_eq!(tally.total(), 3);
    }
}
