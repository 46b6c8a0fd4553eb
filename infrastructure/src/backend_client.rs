use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;

#[derive(Serialize)]
struct ChatRequest {
    message: String,
    session_id: String,
}

#[derive(Serialize)]
struct InitSessionRequest {
    session_id: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// HTTP client for the HealthTalk chat backend. One JSON POST per turn,
/// awaited to completion; no retries.
#[derive(Clone)]
pub struct BackendClient {
    client: Arc<Client>,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Start a session on the backend and return its opening greeting.
    pub async fn init_session(&self, session_id: &str) -> Result<String> {
        let url = format!("{}/chat/init_session", self.base_url);
        let request = InitSessionRequest {
            session_id: session_id.to_string(),
        };
        debug!(%url, session_id, "initializing backend session");
        let response = self.client.post(&url).json(&request).send().await?;
        Self::extract_reply(response).await
    }

    /// Forward one patient message and return the assistant's reply.
    pub async fn send_message(&self, session_id: &str, message: &str) -> Result<String> {
        let url = format!("{}/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
            session_id: session_id.to_string(),
        };
        debug!(%url, session_id, "sending chat turn");
        let response = self.client.post(&url).json(&request).send().await?;
        Self::extract_reply(response).await
    }

    async fn extract_reply(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(anyhow::anyhow!("backend error ({}): {}", status, text));
        }
        let chat_response: ChatResponse = serde_json::from_str(&text)?;
        Ok(chat_response.response)
    }
}
