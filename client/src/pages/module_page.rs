//! `/modules/:id` dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! One route serves every catalog entry. Implemented modules get their page,
//! known but unfinished ones get a placeholder, and unknown ids fall through
//! to the not-found view.

#[cfg(test)]
#[path = "module_page_test.rs"]
mod module_page_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::header::AppHeader;
use crate::config::DASHBOARD_PATH;
use crate::pages::not_found::NotFoundPage;
use crate::pages::production_analyzer::ProductionAnalyzerPage;
use crate::state::modules::{ModuleInfo, ModuleStatus, find_module};

const PRODUCTION_ANALYZER_ID: &str = "production-analyzer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModuleView {
    ProductionAnalyzer,
    Placeholder(&'static ModuleInfo),
    NotFound,
}

fn resolve_module_view(id: &str) -> ModuleView {
    match find_module(id) {
        Some(module) if module.id == PRODUCTION_ANALYZER_ID => ModuleView::ProductionAnalyzer,
        Some(module) => ModuleView::Placeholder(module),
        None => ModuleView::NotFound,
    }
}

fn placeholder_message(status: ModuleStatus) -> &'static str {
    match status {
        ModuleStatus::Available => "Este módulo estará disponível em breve.",
        ModuleStatus::Development => "Este módulo está em desenvolvimento e será liberado em breve.",
        ModuleStatus::Planned => "Este módulo está planejado para as próximas versões da plataforma.",
    }
}

#[component]
pub fn ModulePage() -> impl IntoView {
    let params = use_params_map();
    let resolved = Memo::new(move |_| resolve_module_view(&params.get().get("id").unwrap_or_default()));

    move || match resolved.get() {
        ModuleView::ProductionAnalyzer => view! { <ProductionAnalyzerPage/> }.into_any(),
        ModuleView::Placeholder(module) => view! { <ModulePlaceholder module=module/> }.into_any(),
        ModuleView::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn ModulePlaceholder(module: &'static ModuleInfo) -> impl IntoView {
    view! {
        <div class="module-page">
            <AppHeader/>
            <section class="module-placeholder">
                <span class=format!("module-card__status {}", module.status.class())>{module.status.label()}</span>
                <h1>{module.title}</h1>
                <p>{module.description}</p>
                <p class="module-placeholder__note">{placeholder_message(module.status)}</p>
                <a class="btn" href=DASHBOARD_PATH>
                    "Voltar ao Dashboard"
                </a>
            </section>
        </div>
    }
}
