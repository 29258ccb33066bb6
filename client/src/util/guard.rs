//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::route_guard` re-runs `decide` whenever auth state, nav state,
//! or the location changes and acts on the result. Keeping the decision pure
//! lets the redirect rules be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::{DASHBOARD_PATH, LOGIN_PATH, ROOT_PATH};
use crate::state::auth::AuthState;
use crate::state::nav::NavState;

/// What the guard should do for the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is still resolving; show the placeholder.
    Loading,
    /// Show the routed view.
    Render,
    /// Replace the current history entry with `to`. `remember` is the path
    /// to return to after login, if any.
    Redirect { to: String, remember: Option<String> },
}

/// Paths reachable without a session.
pub fn is_public(path: &str) -> bool {
    path == LOGIN_PATH
}

/// Decide how to handle `path` given the current auth and nav state.
pub fn decide(auth: &AuthState, nav: &NavState, path: &str) -> GuardDecision {
    if nav.hold && path == LOGIN_PATH {
        return GuardDecision::Render;
    }
    if auth.loading {
        return GuardDecision::Loading;
    }

    if auth.is_authenticated() {
        if path == LOGIN_PATH || path == ROOT_PATH {
            return GuardDecision::Redirect { to: return_target(nav.return_to.as_deref()), remember: None };
        }
        return GuardDecision::Render;
    }

    if is_public(path) {
        return GuardDecision::Render;
    }
    let remember = (path != ROOT_PATH).then(|| path.to_owned());
    GuardDecision::Redirect { to: LOGIN_PATH.to_owned(), remember }
}

/// Nav-state bookkeeping for a redirect the guard is carrying out.
///
/// An anonymous redirect stores the requested path. A redirect away from the
/// login or root route with a session already uses the remembered path as its
/// target, so it is consumed here and cannot resurface later.
pub fn settle_return(nav: &mut NavState, to: &str, remember: Option<String>) {
    match remember {
        Some(path) => nav.remember(path),
        None if to != LOGIN_PATH => {
            nav.take_return();
        }
        None => {}
    }
}

/// Resolve where to land after login.
///
/// Only same-origin absolute paths are honored; anything else, and the login
/// route itself, falls back to the dashboard.
pub fn return_target(remembered: Option<&str>) -> String {
    match remembered {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && path != LOGIN_PATH
                && path != ROOT_PATH =>
        {
            path.to_owned()
        }
        _ => DASHBOARD_PATH.to_owned(),
    }
}
