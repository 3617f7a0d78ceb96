//! Pluggable destinations for the finished transcript.

use crate::error::Result;
use crate::pipeline::driver::TranscriptReport;
use std::fs;
use std::path::PathBuf;

/// Pluggable output handler for the final transcript report.
/// Pairs with the driver's observer for input-side progress; this handles
/// the finished result.
pub trait TranscriptSink {
    /// Handle the finished report.
    fn write(&mut self, report: &TranscriptReport) -> Result<()>;

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "sink"
    }
}

/// Writes the transcript to stdout.
pub struct StdoutSink;

impl TranscriptSink for StdoutSink {
    fn write(&mut self, report: &TranscriptReport) -> Result<()> {
        print!("{}", report.text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Writes the transcript to a plain-text file (the download path).
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TranscriptSink for FileSink {
    fn write(&mut self, report: &TranscriptReport) -> Result<()> {
        fs::write(&self.path, &report.text)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Holds the report in memory for library use and tests.
#[derive(Default)]
pub struct CollectorSink {
    report: Option<TranscriptReport>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last report written, if any.
    pub fn report(&self) -> Option<&TranscriptReport> {
        self.report.as_ref()
    }
}

impl TranscriptSink for CollectorSink {
    fn write(&mut self, report: &TranscriptReport) -> Result<()> {
        self.report = Some(report.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::driver::TranscriptSegment;

    fn sample_report() -> TranscriptReport {
        TranscriptReport {
            text: "first segment\nsecond segment\n".to_string(),
            chunk_count: 2,
            segments: vec![
                TranscriptSegment {
                    index: 0,
                    text: "first segment".to_string(),
                },
                TranscriptSegment {
                    index: 1,
                    text: "second segment".to_string(),
                },
            ],
            failures: Vec::new(),
        }
    }

    #[test]
    fn transcript_sink_is_object_safe() {
        let _sink: Box<dyn TranscriptSink> = Box::new(CollectorSink::new());
    }

    #[test]
    fn collector_sink_stores_report() {
        let mut sink = CollectorSink::new();
        sink.write(&sample_report()).unwrap();

        let stored = sink.report().unwrap();
        assert_eq!(stored.text, "first segment\nsecond segment\n");
        assert_eq!(stored.chunk_count, 2);
    }

    #[test]
    fn collector_sink_empty_before_write() {
        let sink = CollectorSink::new();
        assert!(sink.report().is_none());
    }

    #[test]
    fn file_sink_writes_transcript_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meeting_transcript.txt");

        let mut sink = FileSink::new(path.clone());
        sink.write(&sample_report()).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, "first segment\nsecond segment\n");
    }

    #[test]
    fn file_sink_write_to_missing_dir_is_error() {
        let mut sink = FileSink::new(PathBuf::from("/nonexistent/dir/out.txt"));
        assert!(sink.write(&sample_report()).is_err());
    }

    #[test]
    fn sink_names() {
        assert_eq!(StdoutSink.name(), "stdout");
        assert_eq!(CollectorSink::new().name(), "collector");
        assert_eq!(FileSink::new(PathBuf::from("x")).name(), "file");
    }
}
