//! Dashboard page with the hero section and the module catalog grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Access control lives in the route guard, so
//! this page only renders; module clicks are handled by `ModuleCard`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::header::AppHeader;
use crate::components::module_card::ModuleCard;
use crate::config::APP_DESCRIPTION;
use crate::state::auth::AuthState;
use crate::state::modules::MODULES;

const GRID_ANCHOR: &str = "modules";

/// Greeting line for the hero; falls back to a generic one before hydration.
fn greeting(state: &AuthState) -> String {
    match &state.user {
        Some(user) => format!("Olá, {}!", user.name),
        None => "Olá!".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <AppHeader/>
            <section class="dashboard-hero">
                <p class="dashboard-hero__greeting">{move || greeting(&auth.get())}</p>
                <h1 class="dashboard-hero__title">{APP_DESCRIPTION}</h1>
                <p class="dashboard-hero__description">
                    "Centralize o planejamento e o controle da produção em uma única plataforma. "
                    "Acompanhe indicadores, antecipe problemas e tome decisões com dados."
                </p>
                <a class="btn btn--primary dashboard-hero__cta" href=format!("#{GRID_ANCHOR}")>
                    "Explorar Módulos"
                </a>
            </section>
            <section class="dashboard-modules" id=GRID_ANCHOR>
                <h2>"Módulos da Plataforma"</h2>
                <div class="dashboard-grid">
                    {MODULES.iter().map(|module| view! { <ModuleCard module=module/> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
