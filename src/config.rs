//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the DocuVault backend (API lives under `/api/v1`)
    pub base_url: String,

    /// Path of the persisted session file (token + user)
    pub session_path: PathBuf,

    /// Optional request timeout in seconds. When unset, no client-side
    /// timeout is applied and the backend default governs.
    pub timeout_secs: Option<u64>,

    /// Log level
    pub log_level: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("DOCUVAULT_URL").unwrap_or_else(|_| "http://localhost:8000".into()),
            session_path: env::var("DOCUVAULT_SESSION_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".docuvault/session.json")),
            timeout_secs: env::var("DOCUVAULT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            session_path: PathBuf::from(".docuvault/session.json"),
            timeout_secs: None,
            log_level: "info".into(),
        }
    }
}
