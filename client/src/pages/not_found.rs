//! Fallback view for unknown routes and unknown module ids.

use leptos::prelude::*;

use crate::config::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 - Página não encontrada"</h1>
            <p>"O endereço acessado não existe ou foi removido."</p>
            <a class="btn btn--primary" href=DASHBOARD_PATH>
                "Voltar ao Dashboard"
            </a>
        </div>
    }
}
