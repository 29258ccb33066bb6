//! User and session payloads shared by storage, auth state, and pages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user profile, persisted as JSON under `user_data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Display name shown in the header.
    pub name: String,
    /// Login email address.
    pub email: String,
}

/// Persisted proof of authentication: opaque token plus user profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Start a session for `user` with a freshly generated token.
    #[must_use]
    pub fn issue(user: User) -> Self {
        Self { token: generate_token(), user }
    }
}

/// Generate a unique opaque session token.
#[must_use]
pub fn generate_token() -> String {
    format!("pcp_{}", uuid::Uuid::new_v4().simple())
}
