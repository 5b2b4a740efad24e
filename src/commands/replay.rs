//! Replay command implementation

use std::time::Duration;

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ReplayConfig;
use crate::error::TortoiseHareError;

impl FromCommand for ReplayConfig {
    fn from_command(command: Commands) -> Result<Self> {
        match command {
            Commands::Replay { graph, delay_ms } => {
                let resolved = graph.resolve()?;
                Ok(ReplayConfig::builder()
                    .with_source(resolved.source)
                    .with_start(resolved.start)
                    .with_max_steps(resolved.max_steps)
                    .with_delay(Duration::from_millis(delay_ms))
                    .build()?)
            }
            _ => Err(TortoiseHareError::ConfigurationError {
                message: "Invalid command type for ReplayConfig".to_string(),
            }
            .into()),
        }
    }
}

crate::impl_try_from_command!(ReplayConfig);

/// Execute the replay command, printing every transition
pub fn execute_replay_command(command: Commands) -> Result<()> {
    let config = ReplayConfig::from_command(command)
        .wrap_err("Failed to parse replay command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::replay::ReplayExecutor;
    ReplayExecutor::execute(config)
}
