//! JSON format report generation

use serde_json::json;

use super::{RaceReport, ReportGenerator};
use crate::error::TortoiseHareError;
use crate::sweep::SweepSummary;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &RaceReport) -> Result<String, TortoiseHareError> {
        let snapshot = &report.outcome.snapshot;
        let tally = &report.outcome.tally;

        let trace = report.outcome.trace.as_ref().map(|trace| {
            trace
                .iter()
                .map(|s| {
                    json!({
                        "phase": s.phase,
                        "slow": s.slow,
                        "fast": s.fast,
                        "step_count": s.step_count,
                    })
                })
                .collect::<Vec<_>>()
        });

        let report = json!({
            "label": report.label,
            "phase": snapshot.phase,
            "start": snapshot.start,
            "meeting_point": snapshot.meeting_point,
            "cycle_start": snapshot.cycle_start,
            "cycle_length": snapshot.cycle_length(),
            "steps": {
                "detecting": tally.detecting,
                "locating": tally.locating,
                "measuring": tally.measuring,
                "total": tally.total(),
            },
            "trace": trace,
        });

        serde_json::to_string_pretty(&report).map_err(TortoiseHareError::Json)
    }

    fn generate_sweep_report(&self, summary: &SweepSummary) -> Result<String, TortoiseHareError> {
        let entries: Vec<_> = summary
            .entries()
            .iter()
            .map(|entry| {
                json!({
                    "tail_length": entry.shape.tail_length(),
                    "cycle_length": entry.shape.cycle_length(),
                    "found": {
                        "cycle_start": entry.cycle_start,
                        "cycle_length": entry.cycle_length,
                    },
                    "expected": entry.expected,
                    "steps": entry.tally.total(),
                    "verified": entry.verified(),
                })
            })
            .collect();

        let report = json!({
            "clean": summary.is_clean(),
            "total": summary.total(),
            "verified": summary.verified_count(),
            "entries": entries,
            "failures": summary.failures(),
        });

        serde_json::to_string_pretty(&report).map_err(TortoiseHareError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::detector::{CycleDetector, Race};
    use crate::graph::TailCycleShape;
    use crate::sweep::Sweep;

    fn race_report(trace: bool) -> RaceReport {
        let shape = TailCycleShape::new(6, 3).unwrap();
        let mut detector = CycleDetector::new();
        detector.configure(shape.successor_fn(), 0);
        let outcome = Race::new(1_000).with_trace(trace).run(&mut detector).unwrap();
        RaceReport::new(shape.to_string(), outcome)
    }

    #[test]
    fn test_json_report_fields() {
        let report = JsonReportGenerator::new()
            .generate_report(&race_report(false))
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["label"], "tail=6 cycle=3");
        assert_eq!(json["phase"], "done");
        assert_eq!(json["start"], 0);
        assert_eq!(json["cycle_start"], 6);
        assert_eq!(json["cycle_length"], 3);
        assert_eq!(json["steps"]["total"], 16);
        assert!(json["trace"].is_null());
    }

    #[test]
    fn test_json_report_trace() {
        let report = JsonReportGenerator::new()
            .generate_report(&race_report(true))
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let trace = json["trace"].as_array().unwrap();
        assert_eq!(trace.len(), 17);
        assert_eq!(trace[0]["phase"], "detecting");
        assert_eq!(trace[16]["phase"], "done");
    }

    #[test]
    fn test_json_sweep_report() {
        let summary = Sweep::new(0..=2, 1..=3, 1_000).unwrap().run(None);
        let report = JsonReportGenerator::new()
            .generate_sweep_report(&summary)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["clean"], true);
        assert_eq!(json["total"], 9);
        assert_eq!(json["verified"], 9);

        let first = &json["entries"][0];
        assert_eq!(first["tail_length"], 0);
        assert_eq!(first["expected"]["cycle_start"], 0);
        assert_eq!(first["verified"], true);
        assert_eq!(json["failures"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator
            .generate_report(&race_report(false))
            .unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
