//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::{GraphSource, Scenario};
use crate::constants::{run, shape};
use crate::error::TortoiseHareError;
use crate::graph::{FunctionalGraph, TailCycleShape};

/// Graph selection arguments shared by `race` and `replay`
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Number of nodes before the cycle
    #[arg(short, long, env = "TORTOISE_HARE_TAIL")]
    pub tail: Option<usize>,

    /// Number of nodes in the cycle (at least 1)
    #[arg(short, long, env = "TORTOISE_HARE_CYCLE")]
    pub cycle: Option<usize>,

    /// Explicit successor table instead of a tail/cycle shape, e.g. 1,2,3,1
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with_all = ["tail", "cycle"],
        env = "TORTOISE_HARE_SUCCESSORS"
    )]
    pub successors: Option<Vec<usize>>,

    /// TOML scenario file; command line flags take precedence over it
    #[arg(long, value_name = "FILE", env = "TORTOISE_HARE_SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// Start position (defaults to node 0)
    #[arg(long, env = "TORTOISE_HARE_START")]
    pub start: Option<usize>,

    /// Give up after this many steps
    #[arg(long, env = "TORTOISE_HARE_MAX_STEPS")]
    pub max_steps: Option<usize>,
}

/// Graph, start and step ceiling after merging flags, scenario and defaults
#[derive(Debug, Clone)]
pub struct ResolvedGraph {
    pub source: GraphSource,
    pub start: usize,
    pub max_steps: usize,
}

impl GraphArgs {
    /// Merge command line flags over the scenario file over the defaults
    pub fn resolve(&self) -> miette::Result<ResolvedGraph> {
        let scenario = match &self.scenario {
            Some(path) => Scenario::parse_file(path)?,
            None => Scenario::default(),
        };

        let source = if let Some(successors) = &self.successors {
            GraphSource::Table(FunctionalGraph::from_successors(successors.clone())?)
        } else if self.tail.is_none()
            && self.cycle.is_none()
            && let Some(successors) = &scenario.successors
        {
            GraphSource::Table(FunctionalGraph::from_successors(successors.clone())?)
        } else {
            GraphSource::Shape(TailCycleShape::new(
                self.tail
                    .or(scenario.tail_length)
                    .unwrap_or(shape::DEFAULT_TAIL_LENGTH),
                self.cycle
                    .or(scenario.cycle_length)
                    .unwrap_or(shape::DEFAULT_CYCLE_LENGTH),
            )?)
        };

        Ok(ResolvedGraph {
            source,
            start: self.start.or(scenario.start).unwrap_or(0),
            max_steps: self
                .max_steps
                .or(scenario.max_steps)
                .unwrap_or(run::DEFAULT_MAX_STEPS),
        })
    }
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "TORTOISE_HARE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Error for a builder field that was never set
pub fn missing_field(field: &str) -> TortoiseHareError {
    TortoiseHareError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, TortoiseHareError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> miette::Result<Self>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = miette::Report;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
