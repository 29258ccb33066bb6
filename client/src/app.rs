//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading_screen::LoadingScreen;
use crate::components::notice_tray::NoticeTray;
use crate::components::route_guard::RouteGuard;
use crate::config::APP_NAME;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, module_page::ModulePage, not_found::NotFoundPage,
};
use crate::state::{auth::AuthState, nav::NavState, notice::NoticeState};
use crate::util::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, navigation and notice contexts, starts session
/// hydration, and mounts every route behind a single `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let nav = RwSignal::new(NavState::default());
    let notices = RwSignal::new(NoticeState::default());
    let ctx = AuthContext::browser();

    provide_context(auth);
    provide_context(nav);
    provide_context(notices);
    provide_context(ctx.clone());

    // Storage is only reachable in the browser; SSR stays in the loading phase.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        ctx.hydrate(&auth).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = ctx;

    view! {
        <Stylesheet id="leptos" href="/pkg/plataforma-pcp.css"/>
        <Title text=APP_NAME/>

        <Router>
            <NoticeTray/>
            <RouteGuard>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <LoadingScreen/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("modules"), ParamSegment("id")) view=ModulePage/>
                </Routes>
            </RouteGuard>
        </Router>
    }
}
