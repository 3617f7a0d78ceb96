use crate::defaults;
use crate::error::{MeetscribeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub chunking: ChunkingConfig,
}

/// Hosted API configuration.
///
/// The API key is deliberately absent here: it is resolved from the
/// environment at startup and never written to disk or logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub transcription_model: String,
    pub chat_model: String,
}

/// Chunk planning configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChunkingConfig {
    pub max_chunk_mb: u32,
    pub pacing_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            transcription_model: defaults::DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            chat_model: defaults::DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_mb: defaults::MAX_CHUNK_MB,
            pacing_ms: defaults::PACING_MS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MeetscribeError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                MeetscribeError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file, or return defaults if the file
    /// doesn't exist. Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(MeetscribeError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - MEETSCRIBE_BASE_URL → api.base_url
    /// - MEETSCRIBE_TRANSCRIPTION_MODEL → api.transcription_model
    /// - MEETSCRIBE_CHAT_MODEL → api.chat_model
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("MEETSCRIBE_BASE_URL")
            && !url.is_empty()
        {
            self.api.base_url = url;
        }

        if let Ok(model) = std::env::var("MEETSCRIBE_TRANSCRIPTION_MODEL")
            && !model.is_empty()
        {
            self.api.transcription_model = model;
        }

        if let Ok(model) = std::env::var("MEETSCRIBE_CHAT_MODEL")
            && !model.is_empty()
        {
            self.api.chat_model = model;
        }

        self
    }

    /// Validate configuration values before any work begins.
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chunk_mb == 0 {
            return Err(MeetscribeError::ConfigInvalidValue {
                key: "chunking.max_chunk_mb".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(MeetscribeError::ConfigInvalidValue {
                key: "api.base_url".to_string(),
                message: format!("'{}' is not an http(s) URL", self.api.base_url),
            });
        }
        Ok(())
    }

    /// Resolve the API key from the environment.
    ///
    /// Checks MEETSCRIBE_API_KEY first, then GROQ_API_KEY. The key is never
    /// read from the config file and must never be logged.
    pub fn resolve_api_key() -> Result<String> {
        for var in [defaults::API_KEY_ENV, defaults::API_KEY_ENV_FALLBACK] {
            if let Ok(key) = std::env::var(var)
                && !key.trim().is_empty()
            {
                return Ok(key.trim().to_string());
            }
        }
        Err(MeetscribeError::MissingApiKey)
    }

    /// Maximum chunk size in bytes, derived from `max_chunk_mb`.
    pub fn max_chunk_bytes(&self) -> u64 {
        u64::from(self.chunking.max_chunk_mb) * defaults::BYTES_PER_MB
    }

    /// Pacing delay between chunks, if enabled.
    pub fn pacing(&self) -> Option<Duration> {
        if self.chunking.pacing_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.chunking.pacing_ms))
        }
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/meetscribe/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("meetscribe")
            .join("config.toml")
    }
}
