//! Route titles - the single source of truth for tab labels and grouping.
//!
//! Static routes come from the routing table; `/workspace/<shift>` detail
//! views synthesize their label from the shift number. Anything else falls
//! back to the not-found label, which still participates in tab creation.

/// Grouping key for `/workspace/<shift>` detail views.
pub const WORKSPACE_PARENT: &str = "workspace";

pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Returns the display title for a path.
pub fn route_title(path: &str) -> String {
    let fixed = match path {
        "/login" => "Login",
        "/" | "/overview" => "Overview",
        "/workspace" => "Workspace",
        "/shell" => "Shell 105mm",
        "/m107" => "M107",
        "/personnel" => "Personnel",
        "/reports" => "Generate Reports",
        "/settings" => "Settings",
        "/ai-model" => "AI Model",
        other => {
            return match shift_segment(other) {
                Some(shift_no) => format!("Shift {} - Workspace", shift_no),
                None => NOT_FOUND_TITLE.to_string(),
            }
        }
    };
    fixed.to_string()
}

/// Returns the logical-section key for a path.
///
/// All per-shift detail views collapse into the `workspace` section so that
/// switching between shifts reuses one tab; every other route is its own
/// section.
pub fn resolve_parent_id(path: &str) -> Option<String> {
    if shift_segment(path).is_some() {
        return Some(WORKSPACE_PARENT.to_string());
    }
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

/// Extracts the shift number from `/workspace/<shift>` paths.
///
/// Only a single trailing segment qualifies; `/workspace` itself and deeper
/// paths do not.
pub fn shift_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/workspace/")?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}
