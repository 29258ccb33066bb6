//! Stack of transient notices pinned to the top-right corner.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Queue a notice that dismisses itself after `NOTICE_TTL`.
pub fn push_notice(notices: RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = notices.try_update(|n| n.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::util::task::sleep(crate::config::NOTICE_TTL).await;
            let _ = notices.try_update(|n| n.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.kind.class()) role="status">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__close"
                                aria-label="Fechar"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
