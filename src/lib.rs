//! meetscribe - Meeting transcription for the command line
//!
//! Splits long recordings into upload-sized chunks, transcribes them in
//! order against a hosted speech endpoint, and optionally summarizes the
//! result via a hosted chat model.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod stt;

// Core pipeline (load → plan → encode → drive → sink)
pub use audio::{AudioBuffer, ChunkArtifact, encode_chunk};
pub use chunk::{ChunkPlan, TimeRange, plan};
pub use pipeline::{
    ChunkFailure, CollectorSink, FileSink, NullObserver, ProgressObserver, SequentialDriver,
    StdoutSink, TranscriptReport, TranscriptSegment, TranscriptSink,
};
pub use stt::{MockTranscriber, RemoteTranscriber, Transcriber};

// Summarization / Q&A
pub use llm::ChatClient;

// Error handling
pub use error::{MeetscribeError, Result};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }

    #[test]
    fn version_string_contains_plus_when_git_hash_present() {
        let ver = version_string();
        // In a git repo build, GIT_HASH is set → expect "0.1.0+<hash>"
        // In CI without git, expect plain "0.1.0"
        if option_env!("GIT_HASH").is_some_and(|h| !h.is_empty()) {
            assert!(
                ver.contains('+'),
                "With GIT_HASH set, version should contain '+', got: {}",
                ver
            );
        } else {
            assert_eq!(ver, env!("CARGO_PKG_VERSION"));
        }
    }
}
