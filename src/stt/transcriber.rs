use crate::error::{MeetscribeError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for speech-to-text transcription of one encoded chunk.
///
/// This trait allows swapping implementations (hosted API vs mock).
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one encoded audio artifact to text.
    ///
    /// # Arguments
    /// * `wav_bytes` - A standalone encoded WAV file
    /// * `file_name` - Upload filename for the artifact
    ///
    /// # Returns
    /// Transcribed text or error. Any failure here is chunk-level: the
    /// caller reports it and moves on to the next chunk.
    async fn transcribe(&self, wav_bytes: &[u8], file_name: &str) -> Result<String>;

    /// Get the name of the model in use
    fn model_name(&self) -> &str;
}

/// Implement Transcriber for Arc<T> to allow sharing across tasks.
#[async_trait]
impl<T: Transcriber> Transcriber for Arc<T> {
    async fn transcribe(&self, wav_bytes: &[u8], file_name: &str) -> Result<String> {
        (**self).transcribe(wav_bytes, file_name).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Mock transcriber for testing
#[derive(Debug)]
pub struct MockTranscriber {
    model_name: String,
    responses: Vec<String>,
    fail_on: Vec<usize>,
    fail_all: bool,
    calls: std::sync::atomic::AtomicUsize,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            responses: vec!["mock transcription".to_string()],
            fail_on: Vec::new(),
            fail_all: false,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Configure the mock to return a specific response for every call
    pub fn with_response(mut self, response: &str) -> Self {
        self.responses = vec![response.to_string()];
        self
    }

    /// Configure the mock to return one response per call, in order.
    /// Cycles if more calls arrive than responses were provided.
    pub fn with_responses(mut self, responses: &[&str]) -> Self {
        self.responses = responses.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Configure the mock to fail on every call
    pub fn with_failure(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Configure the mock to fail on specific call indices (zero-based)
    pub fn with_failure_at(mut self, indices: &[usize]) -> Self {
        self.fail_on = indices.to_vec();
        self
    }

    /// Number of transcribe calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _wav_bytes: &[u8], _file_name: &str) -> Result<String> {
        let call = self
            .calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if self.fail_all || self.fail_on.contains(&call) {
            return Err(MeetscribeError::Transcription {
                message: "mock transcription failure".to_string(),
            });
        }

        Ok(self.responses[call % self.responses.len()].clone())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transcriber_returns_response() {
        let transcriber = MockTranscriber::new("test-model").with_response("Hello, this is a test");

        let result = transcriber.transcribe(b"fake wav", "chunk-000.wav").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Hello, this is a test");
    }

    #[tokio::test]
    async fn test_mock_transcriber_returns_error_when_configured() {
        let transcriber = MockTranscriber::new("test-model").with_failure();

        let result = transcriber.transcribe(b"fake wav", "chunk-000.wav").await;

        assert!(result.is_err());
        match result {
            Err(MeetscribeError::Transcription { message }) => {
                assert_eq!(message, "mock transcription failure");
            }
            _ => panic!("Expected Transcription error"),
        }
    }

    #[tokio::test]
    async fn test_mock_transcriber_scripted_responses_in_order() {
        let transcriber =
            MockTranscriber::new("test-model").with_responses(&["first", "second", "third"]);

        assert_eq!(
            transcriber.transcribe(b"", "a.wav").await.unwrap(),
            "first"
        );
        assert_eq!(
            transcriber.transcribe(b"", "b.wav").await.unwrap(),
            "second"
        );
        assert_eq!(
            transcriber.transcribe(b"", "c.wav").await.unwrap(),
            "third"
        );
        assert_eq!(transcriber.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_transcriber_fails_only_at_requested_indices() {
        let transcriber = MockTranscriber::new("test-model")
            .with_responses(&["a", "b", "c", "d"])
            .with_failure_at(&[1]);

        assert!(transcriber.transcribe(b"", "0.wav").await.is_ok());
        assert!(transcriber.transcribe(b"", "1.wav").await.is_err());
        assert!(transcriber.transcribe(b"", "2.wav").await.is_ok());
        assert!(transcriber.transcribe(b"", "3.wav").await.is_ok());
    }

    #[test]
    fn test_mock_transcriber_model_name() {
        let transcriber = MockTranscriber::new("whisper-large-v3");
        assert_eq!(transcriber.model_name(), "whisper-large-v3");
    }

    #[tokio::test]
    async fn test_transcriber_trait_is_object_safe() {
        // Verify that we can use Box<dyn Transcriber>
        let transcriber: Box<dyn Transcriber> =
            Box::new(MockTranscriber::new("test-model").with_response("boxed test"));

        assert_eq!(transcriber.model_name(), "test-model");

        let result = transcriber.transcribe(b"bytes", "chunk.wav").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "boxed test");
    }

    #[tokio::test]
    async fn test_arc_transcriber_delegates() {
        let transcriber = Arc::new(MockTranscriber::new("shared").with_response("via arc"));

        assert_eq!(transcriber.model_name(), "shared");
        assert_eq!(
            Transcriber::transcribe(&transcriber, b"", "x.wav")
                .await
                .unwrap(),
            "via arc"
        );
    }

    #[tokio::test]
    async fn test_mock_transcriber_builder_pattern() {
        // Later builder calls replace earlier configuration
        let transcriber = MockTranscriber::new("model")
            .with_response("first response")
            .with_response("second response");

        let result = transcriber.transcribe(b"", "x.wav").await.unwrap();
        assert_eq!(result, "second response");
    }
}
