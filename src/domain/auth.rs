//! Client-held session for an externally authenticated user
//!
//! No credentials are checked here; `login` records whatever identity the
//! caller asserts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Identity used by the demo login action
    pub fn demo() -> Self {
        Self::new("1", "John Doe", "john@example.com")
    }
}

/// Current user plus a transient loading flag.
///
/// Authentication is derived from the presence of a user, so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    is_loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.is_loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.is_loading = false;
    }

    /// Marks an external login as pending or finished
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
