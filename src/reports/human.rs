//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{RaceReport, ReportGenerator};
use crate::core::Snapshot;
use crate::error::TortoiseHareError;
use crate::sweep::SweepSummary;
use crate::utils::string::{optional, pluralize};

pub struct HumanReportGenerator {
    max_trace_rows: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_trace_rows: Option<usize>) -> Self {
        Self { max_trace_rows }
    }
}

/// One line describing a snapshot, as printed by `replay`
pub fn snapshot_line(snapshot: &Snapshot<usize>) -> String {
    format!(
        "{:<10} slow={:<3} fast={:<3} step={:<3} meet={} start={} length={}",
        snapshot.phase,
        snapshot.slow,
        snapshot.fast,
        snapshot.step_count,
        optional(snapshot.meeting_point),
        optional(snapshot.cycle_start),
        optional(snapshot.cycle_length()),
    )
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &RaceReport) -> Result<String, TortoiseHareError> {
        let mut output = String::new();
        let snapshot = &report.outcome.snapshot;
        let tally = &report.outcome.tally;

        write!(
            output,
            "\n{} Cycle found for {}\n\n",
            style("✅").green().bold(),
            style(&report.label).bold()
        )?;

        writeln!(
            output,
            "  {} Meeting point:  {}",
            style("📍").yellow(),
            style(optional(snapshot.meeting_point)).yellow()
        )?;
        writeln!(
            output,
            "  {} Cycle start:    {}",
            style("🔁").green(),
            style(optional(snapshot.cycle_start)).green().bold()
        )?;
        writeln!(
            output,
            "  {} Cycle length:   {}",
            style("📏").cyan(),
            style(optional(snapshot.cycle_length())).cyan().bold()
        )?;

        writeln!(output, "\n  {} Steps by phase:", style("👣").blue())?;
        for (name, count) in [
            ("detecting", tally.detecting),
            ("locating", tally.locating),
            ("measuring", tally.measuring),
        ] {
            writeln!(output, "    {} {:<10} {}", style("→").dim(), name, count)?;
        }
        writeln!(
            output,
            "    {} {} {}",
            style("→").dim(),
            style(format!("{:<10}", "total")).bold(),
            style(tally.total()).bold()
        )?;

        if let Some(trace) = &report.outcome.trace {
            let rows = self
                .max_trace_rows
                .map_or(trace.len(), |limit| limit.min(trace.len()));

            writeln!(output, "\n  {} Trace:", style("🧾").blue())?;
            for (i, snapshot) in trace.iter().take(rows).enumerate() {
                writeln!(
                    output,
                    "    {} {}",
                    style(format!("{i:>3}")).dim(),
                    snapshot_line(snapshot)
                )?;
            }

            if rows < trace.len() {
                writeln!(
                    output,
                    "\n{} Showing {} of {} snapshots. Use --max-trace-rows to see more.",
                    style("ℹ️").blue(),
                    style(rows).yellow(),
                    style(trace.len()).yellow()
                )?;
            }
        }

        Ok(output)
    }

    fn generate_sweep_report(&self, summary: &SweepSummary) -> Result<String, TortoiseHareError> {
        let mut output = String::new();
        let total = summary.total();

        if summary.is_clean() {
            write!(
                output,
                "\n{} All {} {} agree with the oracle (longest race: {} {}).\n",
                style("✅").green().bold(),
                style(total).green().bold(),
                pluralize("shape", total),
                summary.max_steps(),
                pluralize("step", summary.max_steps())
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} {} of {} {} disagree with the oracle:\n\n",
            style("❌").red().bold(),
            style(total - summary.verified_count()).red().bold(),
            total,
            pluralize("shape", total)
        )?;

        for entry in summary.mismatches() {
            writeln!(
                output,
                "  {} {}: found start={} length={}, expected start={} length={}",
                style("•").dim(),
                style(entry.shape).bold(),
                optional(entry.cycle_start),
                optional(entry.cycle_length),
                entry.expected.cycle_start,
                entry.expected.cycle_length
            )?;
        }

        for failure in summary.failures() {
            writeln!(
                output,
                "  {} {}: {}",
                style("•").dim(),
                style(failure.shape).bold(),
                style(&failure.message).red()
            )?;
        }

        Ok(output)
    }
}
