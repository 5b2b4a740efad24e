//! Sweep command executor

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::SweepConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::sweep::Sweep;

pub struct SweepExecutor;

impl CommandExecutor for SweepExecutor {
    type Config = SweepConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let sweep = Sweep::new(config.tails, config.cycles, config.max_steps)
            .wrap_err("Failed to set up sweep")?;

        let mut progress = ProgressReporter::for_terminal();
        let summary = sweep.run(progress.as_mut());

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(None).generate_sweep_report(&summary),
            OutputFormat::Json => JsonReportGenerator::new().generate_sweep_report(&summary),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if any shape disagreed and that was requested
        if config.error_on_mismatch && !summary.is_clean() {
            std::process::exit(1);
        }

        Ok(())
    }
}
