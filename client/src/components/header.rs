//! Top bar for authenticated pages: brand, signed-in user, and logout.

use leptos::prelude::*;

use crate::config::{APP_NAME, DASHBOARD_PATH};
use crate::state::auth::AuthState;
use crate::util::auth::AuthContext;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ctx = expect_context::<AuthContext>();

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    // The route guard sees the anonymous state and sends the viewer to login.
    let on_logout = move |_| ctx.logout(&auth);

    view! {
        <header class="app-header">
            <a class="app-header__brand" href=DASHBOARD_PATH>
                {APP_NAME}
            </a>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{user_name}</span>
            <button class="btn app-header__logout" on:click=on_logout title="Sair">
                "Sair"
            </button>
        </header>
    }
}
