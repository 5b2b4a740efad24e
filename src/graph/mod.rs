//! # Functional Graph Module
//!
//! This module provides the graphs the detector runs over.
//!
//! ## Components
//!
//! - **TailCycleShape**: the reference layout, a straight tail feeding a ring
//! - **FunctionalGraph**: an explicit successor table backed by a petgraph
//!   `DiGraph`, with an SCC-based oracle for tail and cycle facts
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::detector::{CycleDetector, Race};
//! use tortoise_hare::graph::TailCycleShape;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shape = TailCycleShape::new(3, 5)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.configure(shape.successor_fn(), 0);
//! let outcome = Race::new(1_000).run(&mut detector)?;
//!
//! let facts = shape.to_functional_graph()?.analyze(0)?;
//! assert_eq!(outcome.snapshot.cycle_start, Some(facts.cycle_start));
//! assert_eq!(outcome.snapshot.cycle_length(), Some(facts.cycle_length));
//! # Ok(())
//! # }
//! ```

mod functional;
mod types;

pub use functional::{CycleFacts, FunctionalGraph};
pub use types::TailCycleShape;
