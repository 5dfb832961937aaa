//! Batch Accounting Module
//!
//! Tracks the outcome of every directory entry seen during a run.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub errors: Vec<(PathBuf, String)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, input_bytes: u64, output_bytes: u64) {
        self.total += 1;
        self.succeeded += 1;
        self.input_bytes += input_bytes;
        self.output_bytes += output_bytes;
    }

    pub fn fail(&mut self, path: PathBuf, error: String) {
        self.total += 1;
        self.failed += 1;
        self.errors.push((path, error));
    }

    pub fn skip(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    /// Entries that passed the eligibility filter, whatever their outcome.
    pub fn eligible(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when no file converted, even if some eligible files failed.
    pub fn nothing_converted(&self) -> bool {
        self.succeeded == 0
    }

    /// Percentage of eligible entries that converted; 100 when nothing was eligible.
    pub fn success_rate(&self) -> f64 {
        let eligible = self.eligible();
        if eligible == 0 {
            100.0
        } else {
            (self.succeeded as f64 / eligible as f64) * 100.0
        }
    }
}
