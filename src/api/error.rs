//! API error types.

use thiserror::Error;

/// Every failure the HTTP client can hand back to a caller.
///
/// Values are cloneable so they can be stored in signals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401/403 from an authenticated endpoint; the session has already been cleared
    #[error("Authentication failed (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-2xx status
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Network unreachable, CORS rejection, aborted fetch
    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Creates a Request error from a status and an optional server message
    pub fn request(status: u16, server_message: Option<String>) -> Self {
        Self::Request {
            status,
            message: server_message
                .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Server-provided text worth showing to the user, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Request { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
