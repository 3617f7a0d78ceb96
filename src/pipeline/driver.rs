//! Drives chunk transcription strictly in order.
//!
//! One chunk at a time: each external call completes (or fails) before the
//! next begins. A failed chunk is reported and skipped; it never aborts the
//! run. Chunk artifacts are consumed per iteration, so their temp files are
//! released whether or not the chunk transcribed.

use crate::audio::encoder::ChunkArtifact;
use crate::stt::transcriber::Transcriber;
use std::time::Duration;

/// Receives per-chunk progress from the driver.
///
/// Implementations pair with a front end: a progress bar in the CLI, a
/// recording observer in tests.
pub trait ProgressObserver: Send {
    /// A chunk is about to be submitted.
    fn on_chunk_started(&mut self, _index: usize, _total: usize) {}

    /// A chunk failed; its text is skipped and the run continues.
    fn on_chunk_failed(&mut self, _index: usize, _message: &str) {}

    /// Called after every chunk, success or failure.
    /// `percent` is `round(100 × completed / total)`.
    fn on_progress(&mut self, _completed: usize, _total: usize, _percent: u8) {}

    /// All chunks have been attempted.
    fn on_complete(&mut self) {}
}

/// Observer that ignores all progress. For library callers that only
/// want the final report.
pub struct NullObserver;

impl ProgressObserver for NullObserver {}

/// The text one chunk produced, tagged with its position for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub index: usize,
    pub text: String,
}

/// One failed chunk: which one, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkFailure {
    pub index: usize,
    pub message: String,
}

/// The finished run: concatenated transcript, how many chunks the
/// recording was split into, the per-chunk segments, and which chunks
/// failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptReport {
    pub text: String,
    pub chunk_count: usize,
    pub segments: Vec<TranscriptSegment>,
    pub failures: Vec<ChunkFailure>,
}

impl TranscriptReport {
    /// True when every chunk produced text.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Sequential transcription driver.
pub struct SequentialDriver<T: Transcriber> {
    transcriber: T,
    pacing: Option<Duration>,
}

impl<T: Transcriber> SequentialDriver<T> {
    pub fn new(transcriber: T) -> Self {
        Self {
            transcriber,
            pacing: None,
        }
    }

    /// Insert a delay after each chunk. Cosmetic only, giving a progress
    /// indicator time to animate; correctness never depends on it.
    pub fn with_pacing(mut self, delay: Duration) -> Self {
        self.pacing = if delay.is_zero() { None } else { Some(delay) };
        self
    }

    /// Transcribe all chunks in order and return the accumulated report.
    ///
    /// Never fails as a whole: per-chunk errors are recorded in the report
    /// and the run always reaches completion, even if every chunk failed.
    pub async fn transcribe_all(
        &self,
        chunks: Vec<ChunkArtifact>,
        observer: &mut dyn ProgressObserver,
    ) -> TranscriptReport {
        let total = chunks.len();
        let mut text = String::new();
        let mut segments = Vec::new();
        let mut failures = Vec::new();

        for (completed_before, chunk) in chunks.into_iter().enumerate() {
            let index = chunk.index();
            observer.on_chunk_started(index, total);

            let result = match chunk.read_bytes() {
                Ok(bytes) => self.transcriber.transcribe(&bytes, &chunk.file_name()).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(segment) => {
                    text.push_str(&segment);
                    text.push('\n');
                    segments.push(TranscriptSegment {
                        index,
                        text: segment,
                    });
                }
                Err(e) => {
                    let message = e.to_string();
                    observer.on_chunk_failed(index, &message);
                    failures.push(ChunkFailure { index, message });
                }
            }

            let completed = completed_before + 1;
            let percent = (completed as f64 / total as f64 * 100.0).round() as u8;
            observer.on_progress(completed, total, percent);

            if let Some(delay) = self.pacing {
                tokio::time::sleep(delay).await;
            }
            // chunk dropped here, temp file released regardless of outcome
        }

        observer.on_complete();

        TranscriptReport {
            text,
            chunk_count: total,
            segments,
            failures,
        }
    }
}
