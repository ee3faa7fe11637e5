use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::core::Verdict;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Interactive status output on stderr
///
/// Only created when stderr is a terminal, so piped and scripted runs see
/// nothing but the verdict.
pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
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
            current_spinner: None,
        }
    }

    /// Create a reporter if stderr is interactive and output isn't silenced
    pub fn for_stderr(quiet: bool) -> Option<Self> {
        if !quiet && Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_parsing(&mut self, path: &Path) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner(format!("Reading {}...", path.display()));
        self.current_spinner = Some(spinner);
    }

    pub fn entities_declared(&self, count: usize) {
        if let Some(ref pb) = self.current_spinner {
            pb.set_message(format!(
                "Resolving dependencies of {} {}...",
                count,
                pluralize("entity", count)
            ));
        }
    }

    pub fn finish_parsing(&mut self, entities: usize, edges: usize, dropped: usize) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} Built graph: {} {}, {} {}",
            style("✓").green(),
            style(entities).yellow().bold(),
            pluralize("entity", entities),
            style(edges).yellow().bold(),
            pluralize("dependency", edges)
        );
        if dropped > 0 {
            eprintln!(
                "  {} Ignored {} undeclared {}",
                style("→").dim(),
                style(dropped).yellow(),
                pluralize("dependency", dropped)
            );
        }
    }

    pub fn start_cycle_detection(&mut self) {
        let spinner = self.create_spinner("Detecting dependency cycles...".to_string());
        self.current_spinner = Some(spinner);
    }

    pub fn finish_cycle_detection(&mut self, verdict: Verdict) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        if verdict.is_cyclic() {
            eprintln!("{} Cycle detected", style("⚠").yellow().bold());
        } else {
            eprintln!("{} No cycles detected", style("✓").green().bold());
        }
    }
}
