//! Corporate single sign-on shortcuts on the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Neither provider is wired up yet. A click announces the attempt and,
//! after `SSO_FEEDBACK_DELAY`, reports that the feature is unavailable. Both
//! messages go through the root notice queue.

#[cfg(test)]
#[path = "sso_buttons_test.rs"]
mod sso_buttons_test;

use leptos::prelude::*;

use crate::components::notice_tray::push_notice;
use crate::state::notice::{NoticeKind, NoticeState};

const SSO_UNAVAILABLE: &str = "Funcionalidade em desenvolvimento";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SsoMethod {
    ActiveDirectory,
    Corporate,
}

impl SsoMethod {
    pub const ALL: [Self; 2] = [Self::ActiveDirectory, Self::Corporate];

    pub fn label(self) -> &'static str {
        match self {
            Self::ActiveDirectory => "Active Directory",
            Self::Corporate => "SSO Corporativo",
        }
    }

    fn connecting_message(self) -> String {
        format!("Conectando com {}...", self.label())
    }
}

/// Run one sign-on attempt against the notice queue.
///
/// The connecting notice is pushed immediately; the unavailable warning
/// follows once `wait` resolves.
async fn attempt_sso<F: Future<Output = ()>>(notices: RwSignal<NoticeState>, method: SsoMethod, wait: F) {
    log::info!("sso attempt via {}", method.label());
    push_notice(notices, NoticeKind::Info, method.connecting_message());
    wait.await;
    push_notice(notices, NoticeKind::Warning, SSO_UNAVAILABLE);
}

#[component]
pub fn SsoButtons() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_select = move |method: SsoMethod| {
        let attempt = attempt_sso(notices, method, crate::util::task::sleep(crate::config::SSO_FEEDBACK_DELAY));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(attempt);
        #[cfg(not(feature = "hydrate"))]
        drop(attempt);
    };

    view! {
        <div class="sso-buttons">
            {SsoMethod::ALL
                .into_iter()
                .map(move |method| {
                    view! {
                        <button type="button" class="btn sso-buttons__button" on:click=move |_| on_select(method)>
                            {method.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
