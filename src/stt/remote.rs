//! OpenAI-compatible hosted transcription backend (Groq Whisper, open-asr-server, etc.)

use crate::error::{MeetscribeError, Result};
use crate::stt::transcriber::Transcriber;
use async_trait::async_trait;
use serde::Deserialize;

/// Transcribes chunks via an OpenAI-compatible `/audio/transcriptions`
/// endpoint. One multipart upload per chunk, no retries. A failed upload
/// is a chunk-level failure the driver reports and skips.
pub struct RemoteTranscriber {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

/// Response body of the transcription endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptionResponse {
    #[serde(default)]
    pub text: String,
}

impl RemoteTranscriber {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }
}

#[async_trait]
impl Transcriber for RemoteTranscriber {
    async fn transcribe(&self, wav_bytes: &[u8], file_name: &str) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(wav_bytes.to_vec())
            .file_name(file_name.to_string())
            .mime_str("audio/wav")
            .map_err(|e| MeetscribeError::Transcription {
                message: format!("failed to build upload part: {e}"),
            })?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MeetscribeError::Transcription {
                message: format!("request failed: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MeetscribeError::Transcription {
                message: format!("API error {status}: {body}"),
            });
        }

        let parsed: TranscriptionResponse =
            response
                .json()
                .await
                .map_err(|e| MeetscribeError::Transcription {
                    message: format!("invalid response body: {e}"),
                })?;

        Ok(parsed.text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_transcription_path() {
        let t = RemoteTranscriber::new("https://api.groq.com/openai/v1", "whisper-large-v3", "k");
        assert_eq!(
            t.endpoint(),
            "https://api.groq.com/openai/v1/audio/transcriptions"
        );
    }

    #[test]
    fn endpoint_strips_trailing_slash_and_whitespace() {
        let t = RemoteTranscriber::new(" http://localhost:8000/v1/ ", "m", "k");
        assert_eq!(t.endpoint(), "http://localhost:8000/v1/audio/transcriptions");
    }

    #[test]
    fn model_name_reports_configured_model() {
        let t = RemoteTranscriber::new("http://localhost/v1", "whisper-large-v3", "k");
        assert_eq!(t.model_name(), "whisper-large-v3");
    }

    #[test]
    fn response_body_parses_text_field() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text": "hello world"}"#).unwrap();
        assert_eq!(parsed.text, "hello world");
    }

    #[test]
    fn response_body_tolerates_extra_fields() {
        let body = r#"{"text": "hi", "x_groq": {"id": "req_abc"}, "duration": 12.5}"#;
        let parsed: TranscriptionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text, "hi");
    }

    #[test]
    fn response_body_missing_text_defaults_to_empty() {
        let parsed: TranscriptionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text, "");
    }
}
