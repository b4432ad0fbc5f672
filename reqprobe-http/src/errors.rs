//! HTTP error types

use crate::types::HttpMethodError;

/// Error type for HTTP operations and response verification
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(#[from] HttpMethodError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header {name}: {message}")]
    InvalidHeader { name: String, message: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected status {expected}, got {actual}; body: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Failed to load schema '{path}': {message}")]
    SchemaFile { path: String, message: String },

    #[error("No canned response for {0} in offline mode")]
    NoCannedResponse(String),
}
