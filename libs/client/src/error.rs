//! Error types for the ARM client.

use thiserror::Error;

/// Errors raised while configuring or calling Azure Resource Manager.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base URI '{0}': expected an http(s) URL")]
    InvalidBaseUri(String),

    #[error("unknown cloud environment '{0}'")]
    UnknownEnvironment(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authorization failed: {0}")]
    Authorization(String),

    #[error("API error ({status} {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Create an API error from response details.
    pub fn api(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: Option<String>,
    ) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            request_id,
        }
    }

    /// The HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
