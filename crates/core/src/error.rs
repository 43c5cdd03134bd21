//! Error types for the TagSift domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the single remote classification exchange.
#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by endpoint, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Remote classification not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors from writing or rewriting per-category output files.
///
/// There is no partial-write recovery: a failed save fails that action and
/// nothing else.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_displays_correctly() {
        let err = RemoteError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn save_error_carries_path() {
        let err = SaveError::WriteFailed {
            path: PathBuf::from("extract_Clothes.txt"),
            reason: "permission denied".into(),
        };
        assert!(err.to_string().contains("extract_Clothes.txt"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn not_configured_names_the_missing_piece() {
        let err = RemoteError::NotConfigured("endpoint".into());
        assert!(err.to_string().contains("endpoint"));
    }
}
