//! # Tortoise & Hare - Steppable Floyd Cycle Detection
//!
//! Tortoise & Hare runs Floyd's cycle-finding algorithm over a functional
//! graph, where every position has exactly one successor, one transition at a
//! time. Each transition yields an immutable [`core::Snapshot`] of both
//! pointers and of everything found so far, so a caller can pace, replay or
//! visualize the algorithm however it likes.
//!
//! ## Main Components
//!
//! - **Detector**: The steppable [`detector::CycleDetector`] state machine and
//!   the bounded [`detector::Race`] driver
//! - **Graph**: Tail/cycle shapes, explicit successor tables and an
//!   independent strongly-connected-component analysis used for verification
//! - **Sweep**: Parallel verification of the detector over a grid of shapes
//! - **Reports**: Human-readable and JSON output
//!
//! ## Usage
//!
//! ### Stepping by hand
//!
//! ```
//! use tortoise_hare::core::Phase;
//! use tortoise_hare::detector::CycleDetector;
//!
//! # fn main() -> miette::Result<()> {
//! // 0 -> 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 3
//! let mut detector = CycleDetector::new();
//! detector.configure(|n: &u32| if *n < 7 { n + 1 } else { 3 }, 0);
//!
//! let mut snapshot = detector.step()?;
//! assert_eq!((snapshot.slow, snapshot.fast), (1, 2));
//!
//! while !snapshot.is_done() {
//!     snapshot = detector.step()?;
//! }
//!
//! assert_eq!(snapshot.phase, Phase::Done);
//! assert_eq!(snapshot.cycle_start, Some(3));
//! assert_eq!(snapshot.cycle_length(), Some(5));
//! # Ok(())
//! # }
//! ```
//!
//! ### Racing to the end with a step ceiling
//!
//! ```
//! use tortoise_hare::detector::{CycleDetector, Race};
//! use tortoise_hare::graph::TailCycleShape;
//! use tortoise_hare::reports::{HumanReportGenerator, RaceReport, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let shape = TailCycleShape::new(6, 3)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.configure(shape.successor_fn(), 0);
//!
//! let outcome = Race::new(1_000).with_trace(true).run(&mut detector)?;
//! assert_eq!(outcome.snapshot.cycle_start, Some(shape.cycle_start()));
//! assert_eq!(outcome.tally.total(), 16);
//!
//! let report = RaceReport::new(shape.to_string(), outcome);
//! println!("{}", HumanReportGenerator::new(Some(5)).generate_report(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Checking a successor table against the graph analysis
//!
//! ```
//! use tortoise_hare::detector::{CycleDetector, Race};
//! use tortoise_hare::graph::FunctionalGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = FunctionalGraph::from_successors(vec![1, 2, 3, 4, 2])?;
//!
//! let mut detector = CycleDetector::new();
//! detector.configure(graph.successor_fn(), 0);
//! let outcome = Race::new(100).run(&mut detector)?;
//!
//! let expected = graph.analyze(0)?;
//! assert_eq!(outcome.snapshot.cycle_start, Some(expected.cycle_start));
//! assert_eq!(outcome.snapshot.cycle_length(), Some(expected.cycle_length));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod sweep;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    execute_command(cli.command)
}
