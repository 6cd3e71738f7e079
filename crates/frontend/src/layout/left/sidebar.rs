//! Navigation sidebar.
//!
//! A static list of sections; every click goes through
//! `AppGlobalContext::navigate`, the single tab-intent entry point, which
//! decides between activating, replacing and opening a tab.

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

struct NavEntry {
    path: &'static str,
    label: &'static str,
}

const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        path: "/overview",
        label: "Overview",
    },
    NavEntry {
        path: "/workspace",
        label: "Workspace",
    },
    NavEntry {
        path: "/shell",
        label: "Shell 105mm",
    },
    NavEntry {
        path: "/m107",
        label: "M107",
    },
    NavEntry {
        path: "/personnel",
        label: "Personnel",
    },
    NavEntry {
        path: "/reports",
        label: "Generate Reports",
    },
    NavEntry {
        path: "/ai-model",
        label: "AI Model",
    },
];

const SETTINGS_ENTRY: NavEntry = NavEntry {
    path: "/settings",
    label: "Settings",
};

/// Highlight rule: an entry is active when the active tab shows its path;
/// the Workspace entry also covers the per-shift detail views.
fn entry_matches(entry_path: &str, active_path: &str) -> bool {
    active_path == entry_path
        || (entry_path == "/workspace" && active_path.starts_with("/workspace/"))
}

#[component]
fn SidebarItem(entry: &'static NavEntry) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_active = move || {
        ctx.tabs.with(|t| {
            t.active_tab()
                .map(|tab| entry_matches(entry.path, &tab.path))
                .unwrap_or(false)
        })
    };

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
            on:click=move |_| ctx.navigate(entry.path)
        >
            <span>{entry.label}</span>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__nav">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| view! { <SidebarItem entry=entry /> })
                    .collect_view()}
            </div>
            <div class="app-sidebar__bottom">
                <SidebarItem entry=&SETTINGS_ENTRY />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_entry_covers_shift_details() {
        assert!(entry_matches("/workspace", "/workspace"));
        assert!(entry_matches("/workspace", "/workspace/S001"));
        assert!(!entry_matches("/workspace", "/workspaces"));
        assert!(!entry_matches("/shell", "/workspace"));
    }
}
