//! Durable session persistence on top of a `KeyValueStore`.
//!
//! DESIGN
//! ======
//! A session is two independent entries: the raw token under `auth_token`
//! and the JSON user under `user_data`. Either both are present and valid or
//! the session does not exist. Anything else is treated as corruption and
//! both entries are cleared on read.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use super::storage::{KeyValueStore, StorageError};
use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::types::{Session, User};

/// Reads and writes the persisted session pair.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when nothing is stored. A partial pair, an empty entry,
    /// or an unparsable user payload also yields `None` and clears storage.
    pub fn read(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = self.backend.get(USER_KEY).filter(|u| !u.is_empty());

        match (token, raw_user) {
            (None, None) => None,
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    log::warn!("discarding stored session: unreadable {USER_KEY}: {e}");
                    self.clear();
                    None
                }
            },
            (token, _) => {
                let missing = if token.is_some() { USER_KEY } else { TOKEN_KEY };
                log::warn!("discarding stored session: {missing} is missing");
                self.clear();
                None
            }
        }
    }

    /// Persist `session`, replacing any previous pair.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the user cannot be encoded or either entry
    /// cannot be written. On a failed write nothing is left behind.
    pub fn write(&self, session: &Session) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Encode { key: USER_KEY.to_owned(), message: e.to_string() })?;

        self.backend.set(USER_KEY, &raw_user)?;
        if let Err(e) = self.backend.set(TOKEN_KEY, &session.token) {
            self.clear();
            return Err(e);
        }
        Ok(())
    }

    /// Remove both entries unconditionally.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
