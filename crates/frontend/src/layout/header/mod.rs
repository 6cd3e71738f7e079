//! Header component - application top bar.
//!
//! Carries the sidebar toggle, the live-channel status badge and the
//! signed-in user with a logout action.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::live::{ChannelStatus, LiveFeed};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let feed = leptos::context::use_context::<LiveFeed>().expect("LiveFeed context not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        storage::clear_session();
        ctx.clear_tabs();
        set_auth_state.set(AuthState::default());
    };

    let status_label = move || match feed.status.get() {
        ChannelStatus::Idle => "Offline",
        ChannelStatus::Connected => "Live",
        ChannelStatus::Reconnecting => "Reconnecting",
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <button
                    class="app-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    "\u{2630}"
                </button>
                <span class="app-header__title">"True Sight"</span>
            </div>

            <div class="app-header__actions">
                <span
                    class="app-header__status"
                    class:app-header__status--live=move || feed.status.get() == ChannelStatus::Connected
                >
                    {status_label}
                </span>

                <span class="app-header__user">
                    {move || {
                        auth_state
                            .get()
                            .user
                            .map(|u| u.name)
                            .unwrap_or_default()
                    }}
                </span>

                <button class="app-header__icon-btn" on:click=logout title="Log out">
                    "Logout"
                </button>
            </div>
        </header>
    }
}
