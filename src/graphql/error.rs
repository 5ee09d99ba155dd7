//! Error types for the GraphQL client

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source position reported with a GraphQL error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// One entry of a response's `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl fmt::Display for GraphqlError {
    /// `message at 1:5 (launches.0.id)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locations: Vec<String> = self
            .locations
            .iter()
            .map(|l| format!("{}:{}", l.line, l.column))
            .collect();
        let path: Vec<String> = self
            .path
            .iter()
            .map(|p| match p {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        write!(
            f,
            "{} at {} ({})",
            self.message,
            locations.join(", "),
            path.join(".")
        )
    }
}

/// Failure below the GraphQL layer: the request never got a response
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Errors returned by [`super::GraphqlClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or non-success HTTP status
    #[error("Network error: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },

    /// HTTP 401; the stored token has already been cleared
    #[error("Unauthorized: please log in again")]
    Unauthorized,

    /// The server answered with a non-empty `errors` array
    #[error("GraphQL error: {}", .0.first().map(|e| e.message.as_str()).unwrap_or("unknown error"))]
    GraphQl(Vec<GraphqlError>),

    /// The body was not a usable GraphQL response
    #[error("Response parsing failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the caller should send the user to the login view
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Lines suitable for an error log, one per underlying error
    pub fn log_lines(&self) -> Vec<String> {
        match self {
            ApiError::GraphQl(errors) => errors
                .iter()
                .map(|e| format!("GraphQL error: {}", e))
                .collect(),
            ApiError::Network { .. } | ApiError::Unauthorized => vec![self.to_string()],
            ApiError::Parse(_) => vec![self.to_string()],
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Network {
            status: None,
            message: e.0,
        }
    }
}
