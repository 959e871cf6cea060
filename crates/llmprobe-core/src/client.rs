use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered, but not with a 2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// The request never produced an HTTP response (DNS failure, connection
    /// refused, timeout).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The server said 200 but the body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatResponse {
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub total_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ModelList {
    pub data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ModelEntry {
    pub id: String,
}

/// Bearer-authenticated client for an OpenAI-compatible chat endpoint.
pub struct EndpointClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl EndpointClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn chat_completion(
        &self,
        request: &ChatRequest,
        timeout: Duration,
    ) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        tracing::debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn list_models(&self, timeout: Duration) -> Result<ModelList, ClientError> {
        let url = format!("{}/v1/models", self.base_url);
        tracing::debug!(%url, "fetching model list");

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        // The body is read as text first so a failing call can report it verbatim.
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(ClientError::Decode)
    }
}
