//! OpenAI-compatible remote classifier.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, Together AI, and any other
//! endpoint exposing a `/chat/completions` route. One request, one complete
//! response; no retries, no streaming.

use async_trait::async_trait;
use serde::Deserialize;
use tagsift_config::RemoteConfig;
use tagsift_core::{RemoteClassifier, RemoteError, RemoteReply, RemoteRequest};
use tracing::{debug, warn};

/// A classifier backed by an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug)]
pub struct OpenAiCompatClassifier {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatClassifier {
    /// Create a new classifier against a base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Build a classifier from the `[remote]` config table.
    ///
    /// Endpoint, API key, and model must all be present; a missing piece
    /// aborts here, before any request is sent.
    pub fn from_config(remote: &RemoteConfig) -> Result<Self, RemoteError> {
        let endpoint = require(&remote.endpoint, "endpoint")?;
        let api_key = require(
            &remote.api_key,
            "api_key (set TAGSIFT_API_KEY or [remote] api_key)",
        )?;
        require(&remote.model, "model")?;
        Ok(Self::new(endpoint, api_key))
    }

    /// The chat-completions body for one request.
    fn build_body(request: &RemoteRequest) -> serde_json::Value {
        serde_json::json!({
            "model": request.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.content },
            ],
            "stream": false,
        })
    }
}

fn require(field: &Option<String>, name: &str) -> Result<String, RemoteError> {
    field
        .clone()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| RemoteError::NotConfigured(name.into()))
}

#[async_trait]
impl RemoteClassifier for OpenAiCompatClassifier {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn classify(
        &self,
        request: RemoteRequest,
    ) -> std::result::Result<RemoteReply, RemoteError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = Self::build_body(&request);

        debug!(model = %request.model, "Sending classification request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(RemoteError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(RemoteError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Endpoint returned error");
            return Err(RemoteError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::InvalidResponse("No choices in response".into()))?;

        Ok(RemoteReply {
            content: choice.message.content.unwrap_or_default(),
            model: api_response.model,
        })
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Deserialize)]
struct ApiResponse {
    model: String,
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: Option<String>,
}
