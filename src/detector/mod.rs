//! # Cycle Detection Module
//!
//! This module implements Floyd's "tortoise and hare" cycle detection over a
//! functional graph, one transition at a time.
//!
//! ## Algorithm
//!
//! A run moves through three active phases:
//!
//! 1. **Detecting**: the slow pointer takes one step and the fast pointer two.
//!    Once both are on the cycle the gap closes by one node per step, so they
//!    meet within one lap.
//! 2. **Locating**: slow restarts from the start position, fast stays at the
//!    meeting point, and both take single steps. The meeting point lies μ
//!    steps before the cycle start (modulo λ), so they coincide at the cycle
//!    start after exactly μ steps.
//! 3. **Measuring**: fast walks the cycle from the cycle start and counts the
//!    steps until it returns, giving λ.
//!
//! ## Key Components
//!
//! - **CycleDetector**: the steppable state machine
//! - **Race**: drives a detector to completion under a step ceiling
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::core::Phase;
//! use tortoise_hare::detector::CycleDetector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 -> 1 -> 2 -> 3 -> 4 -> 2
//! let mut detector = CycleDetector::new();
//! detector.configure(|&p: &usize| if p < 4 { p + 1 } else { 2 }, 0);
//!
//! let mut snapshot = detector.step()?;
//! while snapshot.phase != Phase::Done {
//!     snapshot = detector.step()?;
//! }
//!
//! assert_eq!(snapshot.cycle_start, Some(2));
//! assert_eq!(snapshot.cycle_length(), Some(3));
//! # Ok(())
//! # }
//! ```

mod detector_impl;
mod race;

pub use detector_impl::*;
pub use race::{Race, RaceOutcome};
