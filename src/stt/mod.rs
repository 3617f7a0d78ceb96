//! Speech-to-text backends.

pub mod remote;
pub mod transcriber;

pub use remote::RemoteTranscriber;
pub use transcriber::{MockTranscriber, Transcriber};
