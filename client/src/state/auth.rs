//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the root as `RwSignal<AuthState>` and read by the route guard,
//! the header, and the login page. Only `AuthContext` (see `util::auth`)
//! mutates it, through the transition methods below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Lifecycle phase derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Startup read of the persisted session has not completed.
    Hydrating,
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true while hydrating and while a login call is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub hydrated: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, hydrated: false }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> AuthPhase {
        match (&self.user, self.hydrated) {
            (_, false) => AuthPhase::Hydrating,
            (Some(_), true) => AuthPhase::Authenticated,
            (None, true) => AuthPhase::Anonymous,
        }
    }

    /// Commit the result of the startup session read.
    pub fn finish_hydration(&mut self, user: Option<User>) {
        self.user = user;
        self.hydrated = true;
        self.loading = false;
    }

    pub fn begin_login(&mut self) {
        self.loading = true;
    }

    /// Clear the in-flight flag; `user` is `Some` only for a successful login.
    pub fn finish_login(&mut self, user: Option<User>) {
        if let Some(user) = user {
            self.user = Some(user);
        }
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
