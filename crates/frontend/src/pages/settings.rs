use crate::pages::frame::PageFrame;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <PageFrame title="Settings">
            <p>
                "Signed in as "
                {move || {
                    auth_state
                        .get()
                        .user
                        .map(|u| format!("{} ({})", u.name, u.username))
                        .unwrap_or_default()
                }}
            </p>
        </PageFrame>
    }
}
