use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{PROGRESS_CHARS, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Reporter for interactive stderr, `None` when piped
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars(PROGRESS_CHARS),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_race(&mut self, label: &str) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Racing tortoise and hare over {}...",
            style("🐢").green(),
            style(label).bold()
        );
    }

    pub fn finish_race(&self, steps: usize) {
        eprintln!(
            "{} Race finished after {} {}",
            style("✓").green(),
            style(steps).yellow().bold(),
            pluralize("step", steps)
        );
    }

    pub fn start_sweep(&mut self, total_shapes: usize) -> ProgressBar {
        eprintln!(
            "{} Sweeping {} graph {}...",
            style("🔄").yellow(),
            style(total_shapes).bold(),
            pluralize("shape", total_shapes)
        );
        let pb = self.create_progress_bar(total_shapes as u64, "Verifying shapes");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_sweep(&mut self, verified: usize, total: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if verified == total {
            eprintln!(
                "{} All {} {} verified",
                style("✓").green().bold(),
                style(total).yellow().bold(),
                pluralize("shape", total)
            );
        } else {
            eprintln!(
                "{} {} of {} {} failed verification",
                style("⚠").yellow().bold(),
                style(total - verified).red().bold(),
                style(total).yellow(),
                pluralize("shape", total)
            );
        }
    }
}
