//! Configuration constants for tortoise-hare
//!
//! This module contains the defaults used throughout the application. Most of
//! them can be overridden through command line flags, environment variables or
//! a scenario file.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Fill characters for the sweep progress bar
    pub const PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏ ";
}

/// Graph shape defaults, matching the classroom demo's sliders
pub mod shape {
    use std::ops::RangeInclusive;

    pub const DEFAULT_TAIL_LENGTH: usize = 3;
    pub const DEFAULT_CYCLE_LENGTH: usize = 5;

    /// Tail lengths offered by the demo
    pub const TAIL_RANGE: RangeInclusive<usize> = 0..=6;
    /// Cycle lengths offered by the demo
    pub const CYCLE_RANGE: RangeInclusive<usize> = 3..=8;
}

/// Run limits
pub mod run {
    /// Step ceiling for a single race
    pub const DEFAULT_MAX_STEPS: usize = 10_000;

    /// Pause between snapshots in `replay`, in milliseconds
    pub const DEFAULT_REPLAY_DELAY_MS: u64 = 500;
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::PROGRESS_CHARS.chars().count(), 9);
    }

    #[test]
    fn test_default_shape_within_demo_ranges() {
        assert!(shape::TAIL_RANGE.contains(&shape::DEFAULT_TAIL_LENGTH));
        assert!(shape::CYCLE_RANGE.contains(&shape::DEFAULT_CYCLE_LENGTH));
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }
}
