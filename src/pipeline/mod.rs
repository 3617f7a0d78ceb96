//! The transcription pipeline: driver and result sinks.

pub mod driver;
pub mod sink;

pub use driver::{
    ChunkFailure, NullObserver, ProgressObserver, SequentialDriver, TranscriptReport,
    TranscriptSegment,
};
pub use sink::{CollectorSink, FileSink, StdoutSink, TranscriptSink};
