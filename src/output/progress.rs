//! Spinner shown on stderr while a command runs. Purely cosmetic: it adds
//! no delay and nothing it does reaches the results.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

pub const LOADING_MESSAGES: &[&str] = &[
    "Scanning resume structure…",
    "Extracting keywords…",
    "Analyzing experience sections…",
    "Evaluating skills alignment…",
    "Checking ATS compatibility…",
    "Generating improvement tips…",
    "Calculating match score…",
    "Finalizing analysis…",
];

pub struct Progress {
    bar: ProgressBar,
    step: usize,
}

impl Progress {
    /// Visible only when `enabled` and stderr is a terminal
    pub fn new(enabled: bool) -> Self {
        if !enabled || !std::io::stderr().is_terminal() {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(100));

        let mut progress = Self { bar, step: 0 };
        progress.advance();
        progress
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            step: 0,
        }
    }

    /// Move to the next loading message, cycling
    pub fn advance(&mut self) {
        self.bar.set_message(LOADING_MESSAGES[self.step % LOADING_MESSAGES.len()]);
        self.step += 1;
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

/// Clears the spinner when a command bails out before `finish`
impl Drop for Progress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
