//! End-to-end tests from scenario files through races to reports

use std::io::Write;

use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;
use tortoise_hare::common::GraphArgs;
use tortoise_hare::detector::{CycleDetector, Race};
use tortoise_hare::reports::{
    HumanReportGenerator, JsonReportGenerator, RaceReport, ReportGenerator,
};
use tortoise_hare::sweep::Sweep;

fn race_scenario(content: &str, trace: bool) -> RaceReport {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();

    let args = GraphArgs {
        scenario: Some(file.path().to_path_buf()),
        ..GraphArgs::default()
    };
    let resolved = args.resolve().unwrap();

    let mut detector = CycleDetector::new();
    resolved
        .source
        .configure(&mut detector, resolved.start)
        .unwrap();
    let outcome = Race::new(resolved.max_steps)
        .with_trace(trace)
        .run(&mut detector)
        .unwrap();

    RaceReport::new(resolved.source.label(), outcome)
}

#[test]
fn test_human_report_from_shape_scenario() {
    let report = race_scenario("tail_length = 6\ncycle_length = 3\n", false);
    let output = HumanReportGenerator::new(None)
        .generate_report(&report)
        .unwrap();

    assert!(predicate::str::contains("Cycle found for tail=6 cycle=3").eval(&output));
    assert!(predicate::str::contains("Cycle start:").eval(&output));
    assert!(predicate::str::contains("Trace:").not().eval(&output));
}

#[test]
fn test_human_report_truncates_trace() {
    let report = race_scenario("tail_length = 3\ncycle_length = 5\n", true);
    let output = HumanReportGenerator::new(Some(4))
        .generate_report(&report)
        .unwrap();

    // 14 transitions plus the initial snapshot
    assert!(predicate::str::contains("Showing 4 of 15 snapshots").eval(&output));
}

#[test]
fn test_json_report_from_table_scenario() {
    let report = race_scenario("successors = [1, 2, 3, 4, 2]\nstart = 0\n", true);
    let output = JsonReportGenerator::new().generate_report(&report).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["label"], "table of 5 nodes");
    assert_eq!(value["phase"], "done");
    assert_eq!(value["cycle_start"], 2);
    assert_eq!(value["cycle_length"], 3);
    assert_eq!(
        value["trace"].as_array().unwrap().len() as u64,
        value["steps"]["total"].as_u64().unwrap() + 1
    );
}

#[test]
fn test_sweep_reports_clean_grid() {
    let summary = Sweep::new(0..=6, 3..=8, 1_000).unwrap().run(None);

    let human = HumanReportGenerator::new(None)
        .generate_sweep_report(&summary)
        .unwrap();
    assert!(predicate::str::contains("All 42 shapes agree").eval(&human));

    let json: Value = serde_json::from_str(
        &JsonReportGenerator::new()
            .generate_sweep_report(&summary)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(json["clean"], true);
    assert_eq!(json["verified"], 42);
}
