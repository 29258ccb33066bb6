//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT` (default 3000)
//! - `SITE_ROOT`: directory holding the built `pkg/` bundle; overrides the
//!   Leptos `site_root` when set

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("invalid PORT {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let site_root = non_empty(lookup("SITE_ROOT")).map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
