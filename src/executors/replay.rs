//! Replay command executor

use std::thread;
use std::time::Duration;

use console::style;
use miette::{Result, WrapErr};

use crate::config::ReplayConfig;
use crate::core::{Phase, Snapshot};
use crate::detector::{CycleDetector, Race};
use crate::error::TortoiseHareError;
use crate::executors::CommandExecutor;
use crate::reports::human::snapshot_line;
use crate::utils::string::pluralize;

pub struct ReplayExecutor;

impl CommandExecutor for ReplayExecutor {
    type Config = ReplayConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let label = config.source.label();
        eprintln!(
            "{} Replaying {} from node {}...\n",
            style("▶").cyan(),
            style(&label).bold(),
            style(config.start).yellow()
        );

        let mut detector = CycleDetector::new();
        config
            .source
            .configure(&mut detector, config.start)
            .wrap_err("Failed to configure cycle detector")?;

        let initial = detector.snapshot().ok_or(TortoiseHareError::NotConfigured)?;
        for line in replay_lines(None, 0, &initial) {
            println!("{line}");
        }

        let mut last_phase = initial.phase;
        let mut transitions = 0usize;
        let outcome = Race::new(config.max_steps)
            .run_observed(&mut detector, |snapshot| {
                transitions += 1;
                for line in replay_lines(Some(last_phase), transitions, snapshot) {
                    println!("{line}");
                }
                last_phase = snapshot.phase;

                if let Some(pause) = pause_after(snapshot, config.delay) {
                    thread::sleep(pause);
                }
            })
            .wrap_err_with(|| format!("Replay over {label} did not finish"))?;

        let total = outcome.tally.total();
        eprintln!(
            "\n{} Done after {} {}",
            style("✓").green().bold(),
            style(total).yellow().bold(),
            pluralize("transition", total)
        );

        Ok(())
    }
}

/// Lines printed for the snapshot after `transition` transitions
///
/// A phase heading precedes the snapshot line whenever the phase differs from
/// `previous`, and always for the first snapshot.
fn replay_lines(previous: Option<Phase>, transition: usize, snapshot: &Snapshot<usize>) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if previous != Some(snapshot.phase) {
        let heading = style(snapshot.phase.description()).bold().to_string();
        if previous.is_some() {
            lines.push(format!("\n{heading}"));
        } else {
            lines.push(heading);
        }
    }
    lines.push(format!("{transition:>5}  {}", snapshot_line(snapshot)));
    lines
}

/// Pause before the next transition, if any
fn pause_after(snapshot: &Snapshot<usize>, delay: Duration) -> Option<Duration> {
    (!snapshot.is_done() && !delay.is_zero()).then_some(delay)
}
