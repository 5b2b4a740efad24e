use std::ops::RangeInclusive;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::core::PhaseTally;
use crate::detector::{CycleDetector, Race};
use crate::error::TortoiseHareError;
use crate::graph::{CycleFacts, TailCycleShape};
use crate::progress::ProgressReporter;

/// One shape's detector result next to the oracle's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepEntry {
    pub shape: TailCycleShape,
    pub cycle_start: Option<usize>,
    pub cycle_length: Option<usize>,
    pub expected: CycleFacts,
    pub tally: PhaseTally,
}

impl SweepEntry {
    /// Whether the detector agrees with the oracle
    pub fn verified(&self) -> bool {
        self.cycle_start == Some(self.expected.cycle_start)
            && self.cycle_length == Some(self.expected.cycle_length)
    }
}

/// A shape whose race failed outright
#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    pub shape: TailCycleShape,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepSummary {
    entries: Vec<SweepEntry>,
    failures: Vec<SweepFailure>,
}

impl SweepSummary {
    /// Entries sorted by tail length, then cycle length
    pub fn entries(&self) -> &[SweepEntry] {
        &self.entries
    }

    pub fn failures(&self) -> &[SweepFailure] {
        &self.failures
    }

    pub fn total(&self) -> usize {
        self.entries.len() + self.failures.len()
    }

    pub fn verified_count(&self) -> usize {
        self.entries.iter().filter(|e| e.verified()).count()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &SweepEntry> {
        self.entries.iter().filter(|e| !e.verified())
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.verified_count() == self.entries.len()
    }

    /// Largest total step count over every shape that finished its race,
    /// whether or not it agreed with the oracle
    pub fn max_steps(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.tally.total())
            .max()
            .unwrap_or(0)
    }
}

/// Runs one detector per shape over a grid of tail and cycle lengths
#[derive(Debug, Clone)]
pub struct Sweep {
    tails: RangeInclusive<usize>,
    cycles: RangeInclusive<usize>,
    race: Race,
}

impl Sweep {
    pub fn new(
        tails: RangeInclusive<usize>,
        cycles: RangeInclusive<usize>,
        max_steps: usize,
    ) -> Result<Self, TortoiseHareError> {
        if tails.is_empty() || cycles.is_empty() {
            return Err(TortoiseHareError::ConfigurationError {
                message: format!(
                    "sweep ranges must not be empty (tails {}..={}, cycles {}..={})",
                    tails.start(),
                    tails.end(),
                    cycles.start(),
                    cycles.end()
                ),
            });
        }
        if *cycles.start() == 0 {
            return Err(TortoiseHareError::InvalidShape {
                message: "sweep cycle lengths must start at 1 or more".to_string(),
            });
        }

        Ok(Self {
            tails,
            cycles,
            race: Race::new(max_steps),
        })
    }

    pub fn shapes(&self) -> Vec<TailCycleShape> {
        self.tails
            .clone()
            .flat_map(|tail| {
                self.cycles
                    .clone()
                    .filter_map(move |cycle| TailCycleShape::new(tail, cycle).ok())
            })
            .collect()
    }

    pub fn run(&self, mut progress: Option<&mut ProgressReporter>) -> SweepSummary {
        let shapes = self.shapes();
        let bar = progress.as_mut().map(|p| p.start_sweep(shapes.len()));

        let (mut entries, mut failures): (Vec<_>, Vec<_>) = shapes
            .into_par_iter()
            .map(|shape| {
                let result = self.run_shape(shape);
                if let Some(pb) = bar.as_ref() {
                    pb.set_message(format!("Verified {shape}"));
                    pb.inc(1);
                }
                result.map_err(|e| SweepFailure {
                    shape,
                    message: e.to_string(),
                })
            })
            .partition_map(|result| match result {
                Ok(v) => rayon::iter::Either::Left(v),
                Err(e) => rayon::iter::Either::Right(e),
            });

        entries.sort_by_key(|e| e.shape);
        failures.sort_by_key(|f| f.shape);

        let summary = SweepSummary { entries, failures };

        if let Some(p) = progress.as_mut() {
            p.finish_sweep(summary.verified_count(), summary.total());
        }

        summary
    }

    fn run_shape(&self, shape: TailCycleShape) -> Result<SweepEntry, TortoiseHareError> {
        let expected = shape.to_functional_graph()?.analyze(0)?;

        let mut detector = CycleDetector::new();
        detector.configure(shape.successor_fn(), 0);
        let outcome = self.race.run(&mut detector)?;

        debug!(%shape, steps = outcome.tally.total(), "shape swept");

        Ok(SweepEntry {
            shape,
            cycle_start: outcome.snapshot.cycle_start,
            cycle_length: outcome.snapshot.cycle_length(),
            expected,
            tally: outcome.tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_demo_ranges_all_verify() {
        let sweep = Sweep::new(0..=6, 3..=8, 1_000).unwrap();
        let summary = sweep.run(None);

        assert_eq!(summary.total(), 7 * 6);
        assert!(summary.is_clean());
        assert_eq!(summary.mismatches().count(), 0);
    }

    #[test]
    fn test_entries_are_sorted() {
        let summary = Sweep::new(0..=2, 1..=2, 1_000).unwrap().run(None);
        let shapes: Vec<(usize, usize)> = summary
            .entries()
            .iter()
            .map(|e| (e.shape.tail_length(), e.shape.cycle_length()))
            .collect();

        assert_eq!(shapes, vec![(0, 1), (0, 2), (1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_tight_ceiling_reports_failures() {
        let summary = Sweep::new(5..=6, 7..=8, 3).unwrap().run(None);

        assert_eq!(summary.entries().len(), 0);
        assert_eq!(summary.failures().len(), 4);
        assert!(!summary.is_clean());
        assert!(summary.failures()[0].message.contains("Step limit of 3"));
    }

    #[test]
    fn test_zero_cycle_range_is_rejected() {
        assert!(matches!(
            Sweep::new(0..=3, 0..=3, 100),
            Err(TortoiseHareError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_empty_range_is_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = Sweep::new(4..=2, 1..=3, 100);
        assert!(matches!(
            result,
            Err(TortoiseHareError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_max_steps_matches_largest_tally() {
        let summary = Sweep::new(6..=6, 3..=3, 1_000).unwrap().run(None);
        assert_eq!(summary.max_steps(), 16);
    }

    #[test]
    fn test_max_steps_ignores_failed_races() {
        // tail=0 cycle=1 finishes in 3 steps; tail=6 cycle=3 needs 16
        let summary = Sweep::new(0..=6, 1..=1, 4).unwrap().run(None);

        assert!(!summary.failures().is_empty());
        assert!(summary.max_steps() <= 4);
        assert_eq!(
            summary.max_steps(),
            summary
                .entries()
                .iter()
                .map(|e| e.tally.total())
                .max()
                .unwrap()
        );
    }
}
