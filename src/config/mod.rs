//! # Configuration Module
//!
//! This module provides configuration structures for all tortoise-hare
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **RaceConfig**: Configuration for the `race` command
//! - **ReplayConfig**: Configuration for the `replay` command
//! - **SweepConfig**: Configuration for the `sweep` command
//! - **Scenario**: Optional TOML file supplying the graph and run limits
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::cli::OutputFormat;
//! use tortoise_hare::common::ConfigBuilder;
//! use tortoise_hare::config::{GraphSource, RaceConfig};
//! use tortoise_hare::graph::TailCycleShape;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RaceConfig::builder()
//!     .with_source(GraphSource::Shape(TailCycleShape::new(3, 5)?))
//!     .with_start(0)
//!     .with_max_steps(1_000)
//!     .with_format(OutputFormat::Human)
//!     .build()?;
//!
//! assert_eq!(config.source.label(), "tail=3 cycle=5");
//! # Ok(())
//! # }
//! ```

pub mod race;
pub mod replay;
pub mod scenario;
pub mod sweep;

pub use race::RaceConfig;
pub use replay::ReplayConfig;
pub use scenario::{GraphSource, Scenario};
pub use sweep::SweepConfig;
