//! Sweep command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SweepConfig;
use crate::error::TortoiseHareError;

impl FromCommand for SweepConfig {
    fn from_command(command: Commands) -> Result<Self> {
        match command {
            Commands::Sweep {
                tail_min,
                tail_max,
                cycle_min,
                cycle_max,
                max_steps,
                format,
                error_on_mismatch,
            } => Ok(SweepConfig::builder()
                .with_tails(tail_min, tail_max)
                .with_cycles(cycle_min, cycle_max)
                .with_max_steps(max_steps)
                .with_format(format.format)
                .with_error_on_mismatch(error_on_mismatch)
                .build()?),
            _ => Err(TortoiseHareError::ConfigurationError {
                message: "Invalid command type for SweepConfig".to_string(),
            }
            .into()),
        }
    }
}

crate::impl_try_from_command!(SweepConfig);

/// Execute the sweep command over a grid of graph shapes
pub fn execute_sweep_command(command: Commands) -> Result<()> {
    let config =
        SweepConfig::from_command(command).wrap_err("Failed to parse sweep command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::sweep::SweepExecutor;
    SweepExecutor::execute(config)
}
