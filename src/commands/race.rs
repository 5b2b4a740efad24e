//! Race command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RaceConfig;
use crate::error::TortoiseHareError;

impl FromCommand for RaceConfig {
    fn from_command(command: Commands) -> Result<Self> {
        match command {
            Commands::Race {
                graph,
                format,
                trace,
                max_trace_rows,
                verify,
            } => {
                let resolved = graph.resolve()?;
                Ok(RaceConfig::builder()
                    .with_source(resolved.source)
                    .with_start(resolved.start)
                    .with_max_steps(resolved.max_steps)
                    .with_format(format.format)
                    .with_trace(trace)
                    .with_max_trace_rows(max_trace_rows)
                    .with_verify(verify)
                    .build()?)
            }
            _ => Err(TortoiseHareError::ConfigurationError {
                message: "Invalid command type for RaceConfig".to_string(),
            }
            .into()),
        }
    }
}

crate::impl_try_from_command!(RaceConfig);

/// Execute the race command, running one detector to completion
pub fn execute_race_command(command: Commands) -> Result<()> {
    let config =
        RaceConfig::from_command(command).wrap_err("Failed to parse race command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::race::RaceExecutor;
    RaceExecutor::execute(config)
}
