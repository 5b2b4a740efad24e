//! # Verification Sweep Module
//!
//! Runs the detector over every tail/cycle shape in a grid, one independent
//! detector per shape in parallel, and checks each answer against the
//! SCC-based oracle in [`crate::graph::FunctionalGraph::analyze`].
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::sweep::Sweep;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = Sweep::new(0..=6, 3..=8, 10_000)?.run(None);
//!
//! assert!(summary.is_clean());
//! assert_eq!(summary.total(), 42);
//! # Ok(())
//! # }
//! ```

mod sweep_impl;

pub use sweep_impl::*;
