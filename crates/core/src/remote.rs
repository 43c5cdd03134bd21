//! RemoteClassifier: the trait seam over LLM classification backends.
//!
//! A RemoteClassifier takes the text no dictionary claimed and asks a remote
//! model to sort it, returning the reply verbatim. One request, one response:
//! no retries, no streaming.
//!
//! Implementations: OpenAI-compatible endpoints, scripted test doubles.

use crate::error::RemoteError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One classification request for a remote model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRequest {
    /// The model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// The system instruction telling the model how to sort tags
    pub system_prompt: String,

    /// The unclassified text to sort
    pub content: String,
}

/// A complete reply from a remote classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteReply {
    /// The reply text, returned verbatim
    pub content: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,
}

/// The remote classification seam.
///
/// The session calls `classify()` without knowing which backend is wired in,
/// so tests can script replies and the CLI can swap endpoints via config.
#[async_trait]
pub trait RemoteClassifier: Send + Sync {
    /// A human-readable name for this backend (e.g., "openai-compatible").
    fn name(&self) -> &str;

    /// Send one request and get the complete reply.
    async fn classify(
        &self,
        request: RemoteRequest,
    ) -> std::result::Result<RemoteReply, RemoteError>;
}
