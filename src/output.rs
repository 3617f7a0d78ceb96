//! Terminal rendering for the CLI adapter.
//!
//! Implements the driver's progress observer with an indicatif bar and
//! renders run summaries. The pipeline itself never prints.

use crate::pipeline::driver::{ProgressObserver, TranscriptReport};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Progress bar observer for interactive runs.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(100)
        };
        bar.set_style(
            // SAFETY: hardcoded template string — always valid
            #[allow(clippy::expect_used)]
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
                .expect("hardcoded progress bar template")
                .progress_chars("#>-"),
        );
        bar.set_message(format!("0/{total} chunks"));
        Self { bar }
    }
}

impl ProgressObserver for ProgressReporter {
    fn on_chunk_started(&mut self, index: usize, total: usize) {
        self.bar
            .set_message(format!("transcribing chunk {}/{}", index + 1, total));
    }

    fn on_chunk_failed(&mut self, index: usize, message: &str) {
        let line = format!("{} chunk {}: {}", "error".red(), index + 1, message);
        self.bar.suspend(|| eprintln!("{line}"));
    }

    fn on_progress(&mut self, completed: usize, total: usize, percent: u8) {
        self.bar.set_position(u64::from(percent));
        self.bar.set_message(format!("{completed}/{total} chunks"));
    }

    fn on_complete(&mut self) {
        self.bar.set_position(100);
        self.bar.finish_with_message("transcription complete");
    }
}

/// Announce how the recording was split, before the run starts.
pub fn announce_plan(part_count: usize, quiet: bool) {
    if !quiet {
        eprintln!("Audio split into {part_count} part(s) for processing");
    }
}

/// Render the post-run summary to stderr.
pub fn render_report_summary(report: &TranscriptReport, quiet: bool) {
    if quiet {
        return;
    }

    if report.is_complete() {
        eprintln!(
            "{} transcribed {} chunk(s)",
            "done:".green(),
            report.chunk_count
        );
    } else {
        eprintln!(
            "{} transcribed {} of {} chunk(s); {} failed",
            "done:".yellow(),
            report.chunk_count - report.failures.len(),
            report.chunk_count,
            report.failures.len()
        );
        for failure in &report.failures {
            eprintln!("  chunk {}: {}", failure.index + 1, failure.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::driver::{ChunkFailure, TranscriptSegment};

    #[test]
    fn progress_reporter_tracks_percent_positions() {
        let mut reporter = ProgressReporter::new(4, true);

        reporter.on_chunk_started(0, 4);
        reporter.on_progress(1, 4, 25);
        assert_eq!(reporter.bar.position(), 25);

        reporter.on_progress(2, 4, 50);
        reporter.on_progress(3, 4, 75);
        reporter.on_progress(4, 4, 100);
        reporter.on_complete();
        assert_eq!(reporter.bar.position(), 100);
        assert!(reporter.bar.is_finished());
    }

    #[test]
    fn progress_reporter_failure_does_not_panic() {
        let mut reporter = ProgressReporter::new(2, true);
        reporter.on_chunk_failed(0, "API error 500: boom");
        reporter.on_progress(1, 2, 50);
    }

    #[test]
    fn render_report_summary_handles_failures_quietly() {
        let report = TranscriptReport {
            text: "a\n".to_string(),
            chunk_count: 2,
            segments: vec![TranscriptSegment {
                index: 0,
                text: "a".to_string(),
            }],
            failures: vec![ChunkFailure {
                index: 1,
                message: "timeout".to_string(),
            }],
        };
        // quiet mode: must not print or panic
        render_report_summary(&report, true);
        announce_plan(2, true);
    }
}
