//! Card for one entry of the module catalog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::push_notice;
use crate::state::modules::{ModuleInfo, select_module};
use crate::state::notice::NoticeState;

#[component]
pub fn ModuleCard(module: &'static ModuleInfo) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let on_select = move |_| {
        let selection = select_module(module);
        let (kind, message) = selection.notice;
        push_notice(notices, kind, message);
        if let Some(route) = selection.navigate_to {
            navigate(route, NavigateOptions::default());
        }
    };

    view! {
        <button class="module-card" on:click=on_select>
            <span class=format!("module-card__status {}", module.status.class())>{module.status.label()}</span>
            <h3 class="module-card__title">{module.title}</h3>
            <p class="module-card__description">{module.description}</p>
        </button>
    }
}
