//! Command-line interface for meetscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Meeting transcription for the command line
#[derive(Parser, Debug)]
#[command(
    name = "meetscribe",
    version,
    about = "Meeting transcription for the command line"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Audio file to transcribe (mp3, wav, m4a)
    #[arg(value_name = "AUDIO")]
    pub audio: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write the transcript to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Transcription model override (default: whisper-large-v3)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum chunk size in MB before the recording is split
    #[arg(long, value_name = "MB")]
    pub max_chunk_mb: Option<u32>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a meeting from audio or an existing transcript
    Summarize {
        /// Audio file to transcribe and summarize
        #[arg(
            value_name = "AUDIO",
            required_unless_present = "transcript",
            conflicts_with = "transcript"
        )]
        audio: Option<PathBuf>,

        /// Summarize an existing transcript file instead of audio
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,

        /// Write the summary to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Ask a question about a meeting
    Ask {
        /// The question to answer from the meeting
        #[arg(value_name = "QUESTION")]
        question: String,

        /// Audio file to transcribe and query
        #[arg(
            value_name = "AUDIO",
            required_unless_present = "transcript",
            conflicts_with = "transcript"
        )]
        audio: Option<PathBuf>,

        /// Query an existing transcript file instead of audio
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
    },

    /// Check configuration and credentials
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
