//! Error types for meetscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetscribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("API key not found. Set MEETSCRIBE_API_KEY (or GROQ_API_KEY) in the environment")]
    MissingApiKey,

    // Audio errors are fatal preconditions, aborting before any chunk is processed
    #[error("Failed to decode audio: {message}")]
    AudioDecode { message: String },

    #[error("Failed to encode chunk: {message}")]
    ChunkEncode { message: String },

    // Per-chunk recoverable errors from the hosted speech endpoint
    #[error("Transcription error: {message}")]
    Transcription { message: String },

    // Chat completion errors (summarize / ask)
    #[error("Chat error: {message}")]
    Chat { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, MeetscribeError>;
