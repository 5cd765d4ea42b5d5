//! Progress reporting for batch form validation
//!
//! Provides visual feedback while a directory of form files is checked,
//! using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a batch of form files
pub struct BatchProgress {
    pub progress: ProgressBar,
    valid: usize,
    invalid: usize,
}

impl BatchProgress {
    /// Create a new progress bar for `total_forms` files
    pub fn new(total_forms: usize) -> Self {
        let progress = ProgressBar::new(total_forms as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}\n{msg}")
        {
            progress.set_style(style.progress_chars("#>-"));
        }

        Self {
            progress,
            valid: 0,
            invalid: 0,
        }
    }

    /// A hidden bar, for output that must stay machine-readable
    pub fn hidden() -> Self {
        Self {
            progress: ProgressBar::hidden(),
            valid: 0,
            invalid: 0,
        }
    }

    /// Record the verdict for one form file
    pub fn record(&mut self, file_name: &str, is_valid: bool) {
        if is_valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
        self.progress.inc(1);
        self.progress.set_message(format!(
            "📋 {} | ✅ {} valid | ❌ {} invalid",
            file_name, self.valid, self.invalid
        ));
    }

    pub fn valid(&self) -> usize {
        self.valid
    }

    pub fn invalid(&self) -> usize {
        self.invalid
    }

    /// Mark the batch as complete
    pub fn finish(&self) {
        self.progress.finish_with_message(format!(
            "✅ Checked {} form(s): {} valid, {} invalid",
            self.valid + self.invalid,
            self.valid,
            self.invalid
        ));
    }
}
