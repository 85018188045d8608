//! Per-file progress while chunking several inputs

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Draws one bar tick per chunked file
///
/// Silent under `--quiet` and for a single input, where a bar would only
/// flash past.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    sentences: usize,
}

impl ProgressReporter {
    /// `quiet` suppresses the bar entirely
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            sentences: 0,
        }
    }

    /// Start the bar for `total_files` resolved inputs
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Tick after a file's output was written, keeping a running sentence total
    pub fn file_completed(&mut self, filename: &str, sentences: usize) {
        self.sentences += sentences;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename} ({} sentences so far)", self.sentences));
            pb.inc(1);
        }
    }

    /// Sentences reported so far
    pub fn sentences(&self) -> usize {
        self.sentences
    }

    /// Leave the bar with the sentence total
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("Complete: {} sentences", self.sentences));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(10);
        assert!(!reporter.is_active());
        reporter.file_completed("a.conllu", 4);
        reporter.finish();
        assert_eq!(reporter.sentences(), 4);
    }

    #[test]
    fn test_single_file_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_bar_for_many_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(3);
        assert!(reporter.is_active());
        reporter.file_completed("a.conllu", 2);
        reporter.file_completed("b.conllu", 0);
        reporter.finish();
        assert_eq!(reporter.sentences(), 2);
    }
}
