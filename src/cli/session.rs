//! Token commands: `login`, `logout` and `token`

use anyhow::{bail, Result};

use super::output::Output;
use crate::storage::{mask_token, TokenStore};

pub fn login(output: &Output, tokens: &TokenStore, token: &str) -> Result<()> {
    if token.trim().is_empty() {
        bail!("Token must not be empty");
    }

    tokens.write(token)?;
    output.verbose_ctx("login", &format!("Token written to {}", tokens.path().display()));
    output.success("Logged in. Requests now send the stored token.");
    Ok(())
}

pub fn logout(output: &Output, tokens: &TokenStore) -> Result<()> {
    if tokens.clear()? {
        output.success("Logged out");
    } else {
        output.success("No token stored");
    }
    Ok(())
}

/// Shows whether a token is stored, masked
pub fn show(output: &Output, tokens: &TokenStore) -> Result<()> {
    let token = tokens.read()?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "stored": token.is_some(),
            "token": token.as_deref().map(mask_token),
            "path": tokens.path().display().to_string(),
        }));
        return Ok(());
    }

    match token {
        Some(token) => println!("Token: {}", mask_token(&token)),
        None => println!("No token stored"),
    }

    Ok(())
}
