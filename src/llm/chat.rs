//! Minimal OpenAI-compatible `/chat/completions` client.
//!
//! The response text is used verbatim: no retries, no validation beyond
//! "the response parsed and contained a choice".

use crate::defaults;
use crate::error::{MeetscribeError, Result};
use serde::{Deserialize, Serialize};

pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    #[serde(default)]
    pub content: String,
}

impl ChatClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send one system + user message pair and return the reply text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| MeetscribeError::Chat {
                message: format!("request failed: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MeetscribeError::Chat {
                message: format!("API error {status}: {body}"),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| MeetscribeError::Chat {
            message: format!("invalid response body: {e}"),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| MeetscribeError::Chat {
                message: "response contained no choices".to_string(),
            })
    }

    /// Summarize a meeting transcript.
    pub async fn summarize(&self, transcript: &str) -> Result<String> {
        self.complete(defaults::SUMMARY_PROMPT, transcript).await
    }

    /// Answer a question about a meeting transcript.
    pub async fn ask(&self, transcript: &str, question: &str) -> Result<String> {
        let user = format!("Transcript:\n{transcript}\n\nQuestion: {question}");
        self.complete(defaults::QA_PROMPT, &user).await
    }
}
