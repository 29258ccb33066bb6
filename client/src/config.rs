//! Compile-time application constants and auth timing settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route paths, storage keys, and UI delays are shared by the guard, the
//! login flow, and the session store. Keeping them here stops the three from
//! drifting apart.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const APP_NAME: &str = "PlataformaPCP";
pub const APP_DESCRIPTION: &str = "Gestão Industrial Inteligente";

/// Public login route.
pub const LOGIN_PATH: &str = "/login";
/// Root path; always resolved through the guard.
pub const ROOT_PATH: &str = "/";
/// Default landing route for authenticated viewers.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key holding the serialized `User`.
pub const USER_KEY: &str = "user_data";

/// Demo account accepted by `DemoCredentials`.
pub const DEMO_EMAIL: &str = "admin@test.com";
pub const DEMO_PASSWORD: &str = "123456";

const LOGIN_DELAY_MS: u64 = 1500;
const SUCCESS_REDIRECT_DELAY_MS: u64 = 1000;

/// Lifetime of a transient notice before it auto-dismisses.
pub const NOTICE_TTL: Duration = Duration::from_millis(3000);
/// Pause before a single sign-on attempt reports that it is not available.
pub const SSO_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Timing knobs for the simulated login round-trip and its acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthSettings {
    /// Simulated network latency inside `login`.
    pub login_delay: Duration,
    /// Pause between the success message and the post-login navigation.
    pub redirect_delay: Duration,
}

impl AuthSettings {
    /// Settings with every delay set to zero.
    #[must_use]
    pub fn immediate() -> Self {
        Self { login_delay: Duration::ZERO, redirect_delay: Duration::ZERO }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(LOGIN_DELAY_MS),
            redirect_delay: Duration::from_millis(SUCCESS_REDIRECT_DELAY_MS),
        }
    }
}
