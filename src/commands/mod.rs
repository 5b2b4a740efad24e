//! Command implementations for the tortoise-hare CLI
//!
//! This module contains the implementations for each CLI command:
//! - race: Run the detector to completion and report the cycle it finds
//! - replay: Print every snapshot of a race as it happens
//! - sweep: Verify the detector over a grid of tail/cycle shapes

pub mod race;
pub mod replay;
pub mod sweep;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Race { .. } => race::execute_race_command(command),
        Commands::Replay { .. } => replay::execute_replay_command(command),
        Commands::Sweep { .. } => sweep::execute_sweep_command(command),
    }
}
