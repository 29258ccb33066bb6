//! Boundary that enforces auth-based routing for every view under it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the `Router`, wrapping `Routes`. The decision itself
//! lives in `util::guard`; this component only tracks its inputs and carries
//! out redirects with history replacement.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;
use crate::state::nav::NavState;
use crate::util::guard::{GuardDecision, decide, settle_return};

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&auth.get(), &nav.get(), &location.pathname.get()));

    Effect::new(move || {
        let GuardDecision::Redirect { to, remember } = decision.get() else {
            return;
        };
        // Untracked: re-deciding on the old path would retarget this redirect.
        nav.update_untracked(|n| settle_return(n, &to, remember));
        navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! {
        <Show
            when=move || matches!(decision.get(), GuardDecision::Render)
            fallback=move || {
                let message = match decision.get() {
                    GuardDecision::Redirect { .. } => "Redirecionando...",
                    _ => "Carregando...",
                };
                view! { <LoadingScreen message=message/> }
            }
        >
            {children()}
        </Show>
    }
}
