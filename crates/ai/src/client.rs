//! HTTP client for an OpenAI-compatible chat-completions endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AiError;

/// A text-completion backend.
///
/// The production implementation is [`ChatModelClient`]; tests substitute a
/// mock so flows can be exercised without network access.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send a single-turn prompt and return the model's text output.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// Reqwest-based client for a hosted chat-completions API.
pub struct ChatModelClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Minimal slice of the chat-completions response we consume.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl ChatModelClient {
    /// Create a new client.
    ///
    /// * `base_url` - API base, e.g. `https://api.openai.com/v1`.
    /// * `api_key`  - bearer token for the `Authorization` header.
    /// * `model`    - model identifier sent with every request.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl GenerativeModel for ChatModelClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AiError::MalformedResponse("response contained no choices".into()))?;

        Ok(content)
    }
}
