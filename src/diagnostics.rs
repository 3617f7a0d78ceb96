//! Startup capability probe.
//!
//! Verifies configuration and credentials once at process start, before any
//! audio is touched. Each concern resolves to a definite available or
//! unavailable state; nothing is re-checked mid-run.

use crate::config::Config;
use crate::error::Result;

/// Result of probing one capability.
#[derive(Debug, Clone, PartialEq)]
pub enum Capability {
    /// Ready to use
    Available,
    /// Not usable, with a user-facing reason
    Unavailable(String),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

/// Everything the pipeline needs before a run can start.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityReport {
    /// API key resolved from the environment
    pub credentials: Capability,
    /// Base URL and model identifiers are well-formed
    pub endpoint: Capability,
    /// Chunk threshold is usable
    pub chunking: Capability,
}

impl CapabilityReport {
    pub fn all_available(&self) -> bool {
        self.credentials.is_available()
            && self.endpoint.is_available()
            && self.chunking.is_available()
    }
}

/// Probe all capabilities once.
pub fn probe(config: &Config) -> CapabilityReport {
    CapabilityReport {
        credentials: credentials_capability(),
        endpoint: endpoint_capability(config),
        chunking: chunking_capability(config),
    }
}

/// Fail fast before any processing: first unavailable capability becomes
/// a typed error.
pub fn ensure_ready(config: &Config) -> Result<()> {
    config.validate()?;
    Config::resolve_api_key()?;
    Ok(())
}

fn credentials_capability() -> Capability {
    match Config::resolve_api_key() {
        Ok(_) => Capability::Available,
        Err(e) => Capability::Unavailable(e.to_string()),
    }
}

fn endpoint_capability(config: &Config) -> Capability {
    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://")
    {
        return Capability::Unavailable(format!(
            "base_url '{}' is not an http(s) URL",
            config.api.base_url
        ));
    }
    if config.api.transcription_model.trim().is_empty() {
        return Capability::Unavailable("transcription_model is empty".to_string());
    }
    if config.api.chat_model.trim().is_empty() {
        return Capability::Unavailable("chat_model is empty".to_string());
    }
    Capability::Available
}

fn chunking_capability(config: &Config) -> Capability {
    if config.chunking.max_chunk_mb == 0 {
        Capability::Unavailable("max_chunk_mb must be at least 1".to_string())
    } else {
        Capability::Available
    }
}

/// Run the probe and print results.
pub fn check_capabilities(config: &Config) -> CapabilityReport {
    println!("Checking meetscribe capabilities...\n");

    let report = probe(config);

    print_capability("API credentials", &report.credentials);
    print_capability("API endpoint", &report.endpoint);
    print_capability("Chunking", &report.chunking);

    println!();
    if report.all_available() {
        println!("✓ Ready to transcribe.");
    } else {
        println!("⚠ Not ready. Fix the items above before running.");
    }

    report
}

fn print_capability(label: &str, capability: &Capability) {
    match capability {
        Capability::Available => println!("{label}: ✓ OK"),
        Capability::Unavailable(reason) => {
            println!("{label}: ✗ UNAVAILABLE");
            println!("  {reason}");
        }
    }
}
