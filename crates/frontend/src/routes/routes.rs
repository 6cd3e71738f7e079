use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::router;
use crate::system::auth::context::use_auth;
use crate::system::auth::storage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is
    // created, i.e. on every transition into the authenticated state.
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Session boundary: the tab collection does not survive logout. While
    // signed out, remember where the user was heading so login can return
    // there.
    Effect::new(move |_| {
        if !auth_state.get().is_authenticated() {
            ctx.clear_tabs();
            let path = router::current_path();
            if path != router::DEFAULT_PATH && path != "/login" {
                storage::save_redirect(&path);
            }
        }
    });

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
