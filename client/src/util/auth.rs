//! Auth context: hydration, login, and logout over the session store.
//!
//! ARCHITECTURE
//! ============
//! `AuthContext` owns the capabilities (session store, credential verifier,
//! timing settings) and is provided once by `App`. It never holds auth state
//! itself; every transition is pushed into an `AuthSink`, which in the app is
//! the root `RwSignal<AuthState>`.
//!
//! ERROR HANDLING
//! ==============
//! `login` always clears `loading` on exit, including when the verifier
//! panics or the future is dropped mid-flight, via the `PendingLogin` guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use super::session_store::SessionStore;
use super::storage::{BrowserStorage, StorageError};
use super::task::sleep;
use crate::config::AuthSettings;
use crate::net::identity::{CredentialVerifier, DemoCredentials};
use crate::net::types::{Session, User};
use crate::state::auth::{AuthPhase, AuthState};

/// Failure of an auth operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Credenciais inválidas")]
    InvalidCredentials,
    #[error("Não foi possível salvar a sessão: {0}")]
    Storage(#[from] StorageError),
}

/// Receiver of auth state transitions.
pub trait AuthSink {
    fn apply(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthSink for RwSignal<AuthState> {
    fn apply(&self, f: impl FnOnce(&mut AuthState)) {
        // A disposed signal means the app root is gone; nothing left to update.
        let _ = self.try_update(f);
    }
}

/// Clears `loading` when dropped, committing `user` if one was recorded.
struct PendingLogin<'a, S: AuthSink> {
    sink: &'a S,
    user: Option<User>,
}

impl<S: AuthSink> Drop for PendingLogin<'_, S> {
    fn drop(&mut self) {
        let user = self.user.take();
        self.sink.apply(|state| state.finish_login(user));
    }
}

/// Process-wide auth capabilities, shared through Leptos context.
#[derive(Clone)]
pub struct AuthContext {
    store: SessionStore,
    verifier: Arc<dyn CredentialVerifier>,
    settings: AuthSettings,
}

impl AuthContext {
    pub fn new(store: SessionStore, verifier: Arc<dyn CredentialVerifier>, settings: AuthSettings) -> Self {
        Self { store, verifier, settings }
    }

    /// Context backed by `localStorage` and the demo credential allowlist.
    pub fn browser() -> Self {
        Self::new(
            SessionStore::new(Arc::new(BrowserStorage)),
            Arc::new(DemoCredentials::default()),
            AuthSettings::default(),
        )
    }

    pub fn settings(&self) -> AuthSettings {
        self.settings
    }

    /// Rebuild auth state from the persisted session.
    ///
    /// Yields one scheduling turn first so the loading placeholder renders
    /// before the decision. Always ends `Anonymous` or `Authenticated`.
    pub async fn hydrate(&self, sink: &impl AuthSink) -> AuthPhase {
        sleep(Duration::ZERO).await;
        let user = self.store.read().map(|session| session.user);
        let phase = if user.is_some() { AuthPhase::Authenticated } else { AuthPhase::Anonymous };
        log::info!("auth hydrated: {phase:?}");
        sink.apply(|state| state.finish_hydration(user));
        phase
    }

    /// Verify credentials, persist a new session, and mark the user signed in.
    ///
    /// The outcome is committed even if the submitting form has unmounted in
    /// the meantime; only the form's own follow-up is skipped.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` when the verifier rejects the pair.
    /// - `Storage` when the session cannot be persisted.
    pub async fn login<S: AuthSink>(&self, sink: &S, email: &str, password: &str) -> Result<User, AuthError> {
        sink.apply(AuthState::begin_login);
        let mut pending = PendingLogin { sink, user: None };

        sleep(self.settings.login_delay).await;

        let user = self.verifier.verify(email, password).inspect_err(|_| {
            log::warn!("login rejected for {email}");
        })?;
        let session = Session::issue(user.clone());
        self.store.write(&session).inspect_err(|e| {
            log::error!("login for {email} could not persist session: {e}");
        })?;

        log::info!("login succeeded for {email}");
        pending.user = Some(user.clone());
        Ok(user)
    }

    /// Drop the persisted session and return to `Anonymous`.
    pub fn logout(&self, sink: &impl AuthSink) {
        self.store.clear();
        sink.apply(AuthState::sign_out);
        log::info!("logged out");
    }
}
