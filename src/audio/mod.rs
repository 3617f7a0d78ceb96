//! Audio loading and per-chunk encoding.

pub mod encoder;
pub mod loader;

pub use encoder::{ChunkArtifact, encode_chunk};
pub use loader::AudioBuffer;
