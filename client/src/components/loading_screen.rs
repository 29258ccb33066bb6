//! Full-page placeholder shown while auth state resolves or a redirect runs.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Carregando...".to_owned());
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
