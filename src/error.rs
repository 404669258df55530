//! Application error types and result alias.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-side validation error, raised before any network call
    #[error("{0}")]
    Validation(String),

    /// Authentication error (HTTP 401 or missing session)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization error (HTTP 403)
    #[error("{0}")]
    Authorization(String),

    /// Not found error (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-2xx API response
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

/// Error body shape returned by the backend on failures.
///
/// Either a single `message`, or a validation `errors` map of
/// field name to a list of messages.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiErrorBody {
    /// Flatten the body into a single user-facing message, preferring the
    /// validation map when present.
    pub fn flatten(&self) -> Option<String> {
        if let Some(errors) = &self.errors {
            let joined: Vec<&str> = errors
                .values()
                .flat_map(|msgs| msgs.iter().map(String::as_str))
                .collect();
            if !joined.is_empty() {
                return Some(joined.join(", "));
            }
        }
        self.message.clone()
    }
}

/// Map a non-2xx response status and body to an [`AppError`].
pub fn error_from_response(status: u16, body: &[u8]) -> AppError {
    let parsed: ApiErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let message = parsed.flatten().unwrap_or_default();

    match status {
        401 => AppError::Authentication(or_default(message, "Invalid credentials")),
        403 => AppError::Authorization(or_default(message, "Access denied")),
        404 => AppError::NotFound(or_default(message, "Resource not found")),
        _ => AppError::Api {
            status,
            message: or_default(message, "Request failed"),
        },
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
