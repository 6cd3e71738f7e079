use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::live::LiveFeed;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab store and the live feed to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(LiveFeed::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
