//! Todo item identifiers
//!
//! ID Format: `t-{7-char-hash}` (e.g., `t-9d3e5f2`)
//!
//! Hash is derived from text + creation timestamp + a per-store sequence
//! number, so two items with the same text created in the same instant
//! still get different IDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid todo ID format: expected 't-{{7-char-hash}}', got '{0}'")]
    InvalidTodoId(String),
}

/// Generates a 7-character hash from text, timestamp and sequence
fn generate_hash(text: &str, timestamp: DateTime<Utc>, sequence: u64) -> String {
    let input = format!(
        "{}{}{}",
        text,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        sequence
    );
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Todo ID in the format `t-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId {
    hash: String,
}

impl TodoId {
    /// Creates a new todo ID from text, timestamp and sequence number
    pub fn new(text: &str, timestamp: DateTime<Utc>, sequence: u64) -> Self {
        Self {
            hash: generate_hash(text, timestamp, sequence),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-{}", self.hash)
    }
}

impl FromStr for TodoId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hash = s
            .strip_prefix("t-")
            .ok_or_else(|| IdError::InvalidTodoId(s.to_string()))?;

        if hash.len() != 7 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidTodoId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_string(),
        })
    }
}

impl TryFrom<String> for TodoId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.to_string()
    }
}
