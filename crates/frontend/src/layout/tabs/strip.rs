use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::state::Tab as TabData;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: TabData) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab_for_active = tab.clone();
    let is_active = Memo::new(move |_| {
        ctx.tabs
            .with(|t| t.active_tab_id() == Some(tab_for_active.id.as_str()))
    });

    let tab_for_click = tab.clone();
    let on_click = move |_| ctx.activate_tab(&tab_for_click.id);

    let tab_for_close = tab.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&tab_for_close.id);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.path.clone()>
            <span class="tab-title">{tab.title}</span>
            <button class="tab-close" on:click=on_close>"\u{00d7}"</button>
        </div>
    }
}

/// The horizontal tab bar. Reads a snapshot of the store and issues intents
/// (activate, close) back through the context.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-strip">
            <For
                each=move || ctx.tabs.with(|t| t.tabs().to_vec())
                key=|tab| (tab.id.clone(), tab.title.clone())
                children=move |tab| view! { <TabButton tab=tab /> }
            />
        </div>
    }
}
