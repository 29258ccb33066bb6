//! Credential verification capability.
//!
//! DESIGN
//! ======
//! `AuthContext` only sees the `CredentialVerifier` trait, so swapping the
//! demo allowlist for a real identity provider touches neither the route
//! guard nor the login page.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::types::User;
use crate::config::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::util::auth::AuthError;

/// Checks an email/password pair and resolves the matching user.
pub trait CredentialVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the pair is not accepted.
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Single hard-coded account used by the demo deployment.
#[derive(Clone, Debug)]
pub struct DemoCredentials {
    email: String,
    password: String,
    user: User,
}

impl DemoCredentials {
    #[must_use]
    pub fn new(email: &str, password: &str, user: User) -> Self {
        Self { email: email.to_owned(), password: password.to_owned(), user }
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new(
            DEMO_EMAIL,
            DEMO_PASSWORD,
            User { id: "1".to_owned(), name: "Administrador".to_owned(), email: DEMO_EMAIL.to_owned() },
        )
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email == self.email && password == self.password {
            Ok(self.user.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
