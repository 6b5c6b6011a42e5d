use std::collections::BTreeMap;

use thiserror::Error;

/// Error types for user directory API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend rejected the payload with per-field messages
    #[error("{message}")]
    Validation {
        message: String,
        details: BTreeMap<String, String>,
    },

    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("API error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Success response without the expected `data` payload
    #[error("Response did not include {0}")]
    MissingData(&'static str),
}

impl ApiError {
    /// Per-field validation messages, if the backend sent any
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ApiError::Validation { details, .. } => Some(details),
            _ => None,
        }
    }
}
