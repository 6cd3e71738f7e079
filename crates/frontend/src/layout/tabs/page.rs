use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::render_route;
use crate::layout::tabs::state::Tab as TabData;
use leptos::prelude::*;

/// Content wrapper for one tab. Inactive tabs stay mounted and are only
/// hidden, so page state survives tab switches.
#[component]
fn TabPage(tab: TabData) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab_id = tab.id.clone();
    let is_active = move || ctx.tabs.with(|t| t.active_tab_id() == Some(tab_id.as_str()));

    let content = render_route(&tab.path);

    view! {
        <div class="tab-page" class:hidden=move || !is_active() data-tab-path=tab.path.clone()>
            {content}
        </div>
    }
}

/// Renders one [`TabPage`] per open tab. Keyed on `(id, path)` so that a
/// replace-in-place rebuilds the content while plain activation does not.
#[component]
pub fn TabPages() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-content">
            <For
                each=move || ctx.tabs.with(|t| t.tabs().to_vec())
                key=|tab| (tab.id.clone(), tab.path.clone())
                children=move |tab| view! { <TabPage tab=tab /> }
            />
        </div>
    }
}
