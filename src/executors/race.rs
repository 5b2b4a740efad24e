//! Race command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::RaceConfig;
use crate::core::Snapshot;
use crate::detector::{CycleDetector, Race};
use crate::error::TortoiseHareError;
use crate::executors::CommandExecutor;
use crate::graph::CycleFacts;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, RaceReport, ReportGenerator};

pub struct RaceExecutor;

impl CommandExecutor for RaceExecutor {
    type Config = RaceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let label = config.source.label();

        // Progress output only when stderr is interactive
        let mut progress = ProgressReporter::for_terminal();
        if let Some(p) = progress.as_mut() {
            p.start_race(&label);
        }

        let mut detector = CycleDetector::new();
        config
            .source
            .configure(&mut detector, config.start)
            .wrap_err("Failed to configure cycle detector")?;

        let outcome = Race::new(config.max_steps)
            .with_trace(config.trace)
            .run(&mut detector)
            .wrap_err_with(|| format!("Race over {label} did not finish"))?;

        if let Some(p) = progress.as_ref() {
            p.finish_race(outcome.tally.total());
        }

        if config.verify {
            let expected = config
                .source
                .expected(config.start)
                .wrap_err("Failed to analyze graph for verification")?;
            verify_outcome(&label, &outcome.snapshot, &expected)?;
            eprintln!(
                "{} Result matches the strongly-connected-component analysis",
                style("✓").green()
            );
        }

        let report = RaceReport::new(label, outcome);
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_trace_rows);
                generator.generate_report(&report)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&report)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        Ok(())
    }
}

/// Compare a terminal snapshot with the facts the graph analysis found
pub fn verify_outcome(
    label: &str,
    snapshot: &Snapshot<usize>,
    expected: &CycleFacts,
) -> Result<(), TortoiseHareError> {
    debug!(%label, ?expected, "verifying race result");

    let found = (snapshot.cycle_start, snapshot.cycle_length());
    if found == (Some(expected.cycle_start), Some(expected.cycle_length)) {
        return Ok(());
    }

    Err(TortoiseHareError::VerificationFailed {
        label: label.to_string(),
        details: format!(
            "found cycle start {:?} and length {:?}, expected start {} and length {}",
            found.0, found.1, expected.cycle_start, expected.cycle_length
        ),
    })
}
