//! Persisted bearer token
//!
//! The token lives in `{config_dir}/auth-token` as plain text. A missing
//! or blank file means "no token".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const TOKEN_FILE: &str = "auth-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Token store inside the given config directory
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored token, if any
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read token: {}", self.path.display())),
        }
    }

    /// Stores a token, replacing any previous one
    pub fn write(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, format!("{}\n", token.trim()))
            .with_context(|| format!("Failed to write token: {}", self.path.display()))
    }

    /// Removes the stored token; returns whether one existed
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove token: {}", self.path.display())),
        }
    }
}

/// Masks all but the last four characters of a token for display
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn write_read_clear() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(&dir.path().join("nested"));

        store.write("  secret-token ").unwrap();
        assert_eq!(store.read().unwrap(), Some("secret-token".to_string()));

        assert!(store.clear().unwrap());
        assert_eq!(store.read().unwrap(), None);
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn blank_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path());
        fs::write(store.path(), "\n").unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn masks_token() {
        assert_eq!(mask_token("abcdefgh"), "****efgh");
        assert_eq!(mask_token("abc"), "***");
    }
}
