//! Report generation modules for different output formats
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::detector::RaceOutcome;
use crate::error::TortoiseHareError;
use crate::sweep::SweepSummary;

/// A finished race over integer node positions, ready for reporting
#[derive(Debug, Clone)]
pub struct RaceReport {
    /// Describes the graph raced over, e.g. `tail=3 cycle=5`
    pub label: String,
    pub outcome: RaceOutcome<usize>,
}

impl RaceReport {
    pub fn new(label: impl Into<String>, outcome: RaceOutcome<usize>) -> Self {
        Self {
            label: label.into(),
            outcome,
        }
    }
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report for a single race
    fn generate_report(&self, report: &RaceReport) -> Result<String, TortoiseHareError>;

    /// Generate a report for a verification sweep
    fn generate_sweep_report(&self, summary: &SweepSummary) -> Result<String, TortoiseHareError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
