pub mod global_context;
pub mod header;
pub mod left;
pub mod tabs;

use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |  TabStrip                    |
/// |   (Left)  |  active tab content          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                // Main content area: tab strip plus one page per open tab
                <div class="app-main">
                    <tabs::TabStrip />
                    <tabs::TabPages />
                </div>
            </div>
        </div>
    }
}
