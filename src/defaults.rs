//! Default configuration constants for meetscribe.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Audio sample rate (Hz) that chunks are encoded at.
///
/// 16kHz mono is the standard input format for speech recognition models
/// and keeps per-chunk uploads small.
pub const SAMPLE_RATE: u32 = 16000;

/// Maximum chunk size in megabytes before a recording is split.
///
/// Hosted speech endpoints typically reject uploads over ~25 MB; 23 MB
/// leaves headroom for multipart framing.
pub const MAX_CHUNK_MB: u32 = 23;

/// Default hosted transcription model.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3";

/// Default hosted chat model for summarization and Q&A.
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default API base URL (OpenAI-compatible, Groq-hosted).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default pacing delay between chunks, in milliseconds.
///
/// Purely cosmetic: gives a progress indicator time to animate. Zero
/// disables it; correctness never depends on this delay.
pub const PACING_MS: u64 = 0;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MEETSCRIBE_API_KEY";

/// Fallback environment variable for the API key.
pub const API_KEY_ENV_FALLBACK: &str = "GROQ_API_KEY";

/// System prompt for transcript summarization.
pub const SUMMARY_PROMPT: &str = "You are a meeting assistant. Summarize the \
meeting transcript into key discussion points, decisions, and action items. \
Be concise and keep the original speakers' intent.";

/// System prompt for transcript Q&A.
pub const QA_PROMPT: &str = "You are a meeting assistant. Answer the user's \
question using only the meeting transcript provided. If the transcript does \
not contain the answer, say so.";

/// Bytes per megabyte, for chunk threshold arithmetic.
pub const BYTES_PER_MB: u64 = 1024 * 1024;
