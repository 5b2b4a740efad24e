use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, GraphArgs};
use crate::constants::{run, shape};

#[derive(Parser)]
#[command(
    name = "tortoise-hare",
    about = "🐢🐇 Step through Floyd's cycle detection on functional graphs",
    long_about = "tortoise-hare runs Floyd's tortoise-and-hare algorithm over a functional graph \
                  (every node has exactly one successor) one transition at a time. It finds the \
                  meeting point, the first node of the cycle and the cycle length, and can \
                  replay every intermediate pointer position.",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG takes
    /// precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Race the tortoise and the hare to the end and report the result
    ///
    /// Runs the detector to completion over a tail/cycle shape, an explicit
    /// successor table or a scenario file, and reports the meeting point,
    /// the cycle start and the cycle length.
    #[command(
        long_about = "Run all three phases of Floyd's algorithm (detection, locating the cycle \
                      start, measuring the cycle) and report the results together with the \
                      number of steps spent in each phase. The run is bounded by --max-steps so \
                      a successor table without a reachable cycle cannot loop forever."
    )]
    Race {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Record every snapshot and include it in the report
        #[arg(long, env = "TORTOISE_HARE_TRACE")]
        trace: bool,

        /// Maximum number of trace rows to print (shows all by default)
        #[arg(long, env = "TORTOISE_HARE_MAX_TRACE_ROWS")]
        max_trace_rows: Option<usize>,

        /// Check the result against an independent strongly-connected-component
        /// analysis and fail on disagreement
        #[arg(long, env = "TORTOISE_HARE_VERIFY")]
        verify: bool,
    },

    /// Replay the race one transition at a time
    ///
    /// Prints a line for every snapshot as it happens, pausing between
    /// transitions so the pointers can be followed by eye.
    #[command(
        long_about = "Step the detector one transition at a time and print every snapshot: the \
                      phase, both pointer positions, the step count within the phase and any \
                      results found so far. --delay-ms controls the pause between transitions; \
                      use 0 to print the whole replay at once."
    )]
    Replay {
        #[command(flatten)]
        graph: GraphArgs,

        /// Pause between transitions in milliseconds
        #[arg(
            long,
            default_value_t = run::DEFAULT_REPLAY_DELAY_MS,
            env = "TORTOISE_HARE_DELAY_MS"
        )]
        delay_ms: u64,
    },

    /// Verify the detector over a whole grid of tail and cycle lengths
    ///
    /// Races every shape in the grid in parallel and compares each answer
    /// with an independent analysis of the graph.
    #[command(
        long_about = "Run one detector per tail/cycle shape in the given inclusive ranges, in \
                      parallel, and compare the cycle start and cycle length each one finds \
                      against a strongly-connected-component analysis of the same graph. The \
                      default ranges match the classroom demo's sliders."
    )]
    Sweep {
        /// Smallest tail length
        #[arg(long, default_value_t = *shape::TAIL_RANGE.start(), env = "TORTOISE_HARE_TAIL_MIN")]
        tail_min: usize,

        /// Largest tail length
        #[arg(long, default_value_t = *shape::TAIL_RANGE.end(), env = "TORTOISE_HARE_TAIL_MAX")]
        tail_max: usize,

        /// Smallest cycle length
        #[arg(long, default_value_t = *shape::CYCLE_RANGE.start(), env = "TORTOISE_HARE_CYCLE_MIN")]
        cycle_min: usize,

        /// Largest cycle length
        #[arg(long, default_value_t = *shape::CYCLE_RANGE.end(), env = "TORTOISE_HARE_CYCLE_MAX")]
        cycle_max: usize,

        /// Give up on a shape after this many steps
        #[arg(long, default_value_t = run::DEFAULT_MAX_STEPS, env = "TORTOISE_HARE_MAX_STEPS")]
        max_steps: usize,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if any shape fails verification
        #[arg(long, env = "TORTOISE_HARE_ERROR_ON_MISMATCH")]
        error_on_mismatch: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_race_with_table() {
        let cli = Cli::try_parse_from([
            "tortoise-hare",
            "race",
            "--successors",
            "1,2,3,1",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Race { graph, format, .. } => {
                assert_eq!(graph.successors, Some(vec![1, 2, 3, 1]));
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("Expected race command"),
        }
    }

    #[test]
    fn test_successors_conflict_with_shape() {
        let result = Cli::try_parse_from([
            "tortoise-hare",
            "race",
            "--successors",
            "0",
            "--tail",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sweep_defaults_match_demo() {
        let cli = Cli::try_parse_from(["tortoise-hare", "sweep"]).unwrap();

        match cli.command {
            Commands::Sweep {
                tail_min,
                tail_max,
                cycle_min,
                cycle_max,
                ..
            } => {
                assert_eq!((tail_min, tail_max), (0, 6));
                assert_eq!((cycle_min, cycle_max), (3, 8));
            }
            _ => panic!("Expected sweep command"),
        }
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["tortoise-hare", "-vv", "replay"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
