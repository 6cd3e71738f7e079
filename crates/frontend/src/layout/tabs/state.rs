//! The tab store proper: an owned, ordered collection of open tabs plus the
//! rules mapping navigation onto "activate existing", "replace active" or
//! "open new".
//!
//! Everything here is synchronous and free of `web_sys`, so the whole state
//! machine is testable on the host. Operations that want the router to render
//! a path return a [`NavCommand`]; the reconciliation entry point
//! [`TabsState::on_external_route_change`] never does, which is what breaks
//! the route-change -> tab-update -> route-change loop.

use uuid::Uuid;

use super::titles::{resolve_parent_id, route_title};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub path: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
}

/// Instruction for the router bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Render(String),
}

/// Explicit tab creation, used when the caller has already decided a new tab
/// is warranted.
#[derive(Debug, Clone)]
pub struct TabSpec {
    pub title: String,
    pub path: String,
    pub parent_id: Option<String>,
}

impl TabSpec {
    /// Builds a spec for a path using the shared title/section tables.
    pub fn for_path(path: &str) -> Self {
        Self {
            title: route_title(path),
            path: path.to_string(),
            parent_id: resolve_parent_id(path),
        }
    }
}

/// Partial field update for [`TabsState::update_tab`].
#[derive(Debug, Clone, Default)]
pub struct TabUpdate {
    pub title: Option<String>,
    pub path: Option<String>,
    pub parent_id: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let id = self.active_tab_id.as_deref()?;
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tab-initiated navigation (sidebar click, table action).
    ///
    /// Dedupes on the exact path, otherwise opens a new tab or replaces the
    /// active tab's content depending on the logical section.
    pub fn navigate(&mut self, path: &str) -> Option<NavCommand> {
        if let Some(existing) = self.tabs.iter().find(|t| t.path == path) {
            let id = existing.id.clone();
            return self.activate_tab(&id);
        }

        let parent_id = resolve_parent_id(path);
        match self.replace_target(parent_id.as_deref()) {
            None => {
                // The new tab itself is the navigation, so no router command.
                self.add_tab(TabSpec::for_path(path));
                None
            }
            Some(active_id) => {
                self.update_tab(
                    &active_id,
                    TabUpdate {
                        title: Some(route_title(path)),
                        path: Some(path.to_string()),
                        parent_id: Some(parent_id),
                    },
                );
                Some(NavCommand::Render(path.to_string()))
            }
        }
    }

    /// The active tab's id, when it belongs to the same logical section and
    /// should be replaced in place. `None` means open a new tab: empty
    /// collection, no active tab, or no section to match on.
    fn replace_target(&self, parent_id: Option<&str>) -> Option<String> {
        let active = self.active_tab()?;
        let parent_id = parent_id?;
        (active.parent_id.as_deref() == Some(parent_id)).then(|| active.id.clone())
    }

    /// Marks exactly one tab active. Unknown ids are ignored.
    pub fn activate_tab(&mut self, id: &str) -> Option<NavCommand> {
        let path = self.tabs.iter().find(|t| t.id == id)?.path.clone();
        self.set_active(id);
        Some(NavCommand::Render(path))
    }

    /// Removes a tab. Closing the active tab promotes the right neighbour,
    /// then the left; closing the last tab clears the collection and sends
    /// the router home.
    pub fn close_tab(&mut self, id: &str) -> Option<NavCommand> {
        let idx = self.tabs.iter().position(|t| t.id == id)?;

        if self.active_tab_id.as_deref() != Some(id) {
            self.tabs.remove(idx);
            return None;
        }

        let replacement = if idx + 1 < self.tabs.len() {
            Some(&self.tabs[idx + 1])
        } else if idx > 0 {
            Some(&self.tabs[idx - 1])
        } else {
            None
        };
        let replacement = replacement.map(|t| (t.id.clone(), t.path.clone()));

        self.tabs.remove(idx);
        match replacement {
            Some((rid, path)) => {
                self.set_active(&rid);
                Some(NavCommand::Render(path))
            }
            None => {
                self.active_tab_id = None;
                Some(NavCommand::Render(ROOT_PATH.to_string()))
            }
        }
    }

    /// Appends a new active tab, deactivating all others.
    pub fn add_tab(&mut self, spec: TabSpec) {
        for tab in &mut self.tabs {
            tab.is_active = false;
        }
        let tab = Tab {
            id: Uuid::new_v4().to_string(),
            title: spec.title,
            path: spec.path,
            parent_id: spec.parent_id,
            is_active: true,
        };
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab);
    }

    /// Merges partial updates into the named tab. Unknown ids are ignored.
    pub fn update_tab(&mut self, id: &str, updates: TabUpdate) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(title) = updates.title {
            tab.title = title;
        }
        if let Some(path) = updates.path {
            tab.path = path;
        }
        if let Some(parent_id) = updates.parent_id {
            tab.parent_id = parent_id;
        }
    }

    /// Router-initiated reconciliation (back navigation, deep link, login
    /// restore). Never emits a router command.
    pub fn on_external_route_change(&mut self, path: &str) {
        if path == LOGIN_PATH {
            return;
        }

        if let Some(existing) = self.tabs.iter().find(|t| t.path == path) {
            let id = existing.id.clone();
            self.set_active(&id);
            return;
        }

        if !self.tabs.is_empty() {
            if path == ROOT_PATH {
                return;
            }
            let Some(active_id) = self.active_tab_id.clone() else {
                return;
            };
            self.update_tab(
                &active_id,
                TabUpdate {
                    title: Some(route_title(path)),
                    path: Some(path.to_string()),
                    parent_id: Some(resolve_parent_id(path)),
                },
            );
            return;
        }

        // Empty collection: first navigation after authentication.
        self.add_tab(TabSpec::for_path(path));
    }

    /// Session boundary: drop everything on logout.
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.active_tab_id = None;
    }

    fn set_active(&mut self, id: &str) {
        for tab in &mut self.tabs {
            tab.is_active = tab.id == id;
        }
        self.active_tab_id = Some(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(state: &TabsState) -> usize {
        state.tabs().iter().filter(|t| t.is_active).count()
    }

    fn assert_invariants(state: &TabsState) {
        let mut ids: Vec<_> = state.tabs().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.tabs().len(), "tab ids must be unique");
        if state.is_empty() {
            assert_eq!(active_count(state), 0);
            assert!(state.active_tab_id().is_none());
        } else {
            assert_eq!(active_count(state), 1, "exactly one active tab");
            assert_eq!(
                state.active_tab().map(|t| t.id.as_str()),
                state.active_tab_id()
            );
        }
    }

    #[test]
    fn first_navigation_opens_one_active_tab() {
        let mut state = TabsState::new();
        let cmd = state.navigate("/overview");
        assert_eq!(cmd, None, "fresh tab creation issues no router command");
        assert_eq!(state.tabs().len(), 1);
        let tab = state.active_tab().unwrap();
        assert_eq!(tab.path, "/overview");
        assert_eq!(tab.title, "Overview");
        assert_invariants(&state);
    }

    #[test]
    fn different_section_opens_second_tab() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        let cmd = state.navigate("/workspace");
        assert_eq!(cmd, None);
        assert_eq!(state.tabs().len(), 2);
        assert_eq!(state.active_tab().unwrap().path, "/workspace");
        assert_invariants(&state);
    }

    #[test]
    fn same_section_replaces_active_tab_in_place() {
        let mut state = TabsState::new();
        state.navigate("/workspace/S001");
        let id_before = state.active_tab_id().unwrap().to_string();

        let cmd = state.navigate("/workspace/S002");
        assert_eq!(cmd, Some(NavCommand::Render("/workspace/S002".to_string())));
        assert_eq!(state.tabs().len(), 1, "collection size unchanged");
        let tab = state.active_tab().unwrap();
        assert_eq!(tab.id, id_before, "tab id is preserved on replace");
        assert_eq!(tab.path, "/workspace/S002");
        assert_eq!(tab.title, "Shift S002 - Workspace");
        assert_invariants(&state);
    }

    #[test]
    fn workspace_list_and_detail_share_a_tab() {
        // /workspace has parentId "/workspace"; /workspace/S001 has
        // parentId "workspace", so the detail opens its own tab first.
        let mut state = TabsState::new();
        state.navigate("/workspace");
        state.navigate("/workspace/S001");
        assert_eq!(state.tabs().len(), 2);

        // But S001 -> S002 stays in place.
        state.navigate("/workspace/S002");
        assert_eq!(state.tabs().len(), 2);
        assert_eq!(state.active_tab().unwrap().title, "Shift S002 - Workspace");
        assert_invariants(&state);
    }

    #[test]
    fn navigate_to_existing_path_activates_without_duplicate() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        state.navigate("/shell");
        assert_eq!(state.tabs().len(), 2);

        let cmd = state.navigate("/overview");
        assert_eq!(cmd, Some(NavCommand::Render("/overview".to_string())));
        assert_eq!(state.tabs().len(), 2, "no duplicate tab for the same path");
        assert_eq!(state.active_tab().unwrap().path, "/overview");
        assert_invariants(&state);
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut state = TabsState::new();
        state.navigate("/shell");
        let snapshot = state.clone();
        state.navigate("/shell");
        assert_eq!(state, snapshot);
    }

    #[test]
    fn closing_active_tab_prefers_right_neighbour() {
        let mut state = TabsState::new();
        state.navigate("/overview"); // A
        state.navigate("/shell"); // B
        state.navigate("/m107"); // C
        let b_id = state.tabs()[1].id.clone();
        state.activate_tab(&b_id);

        let cmd = state.close_tab(&b_id);
        assert_eq!(cmd, Some(NavCommand::Render("/m107".to_string())));
        assert_eq!(state.tabs().len(), 2);
        assert_eq!(state.active_tab().unwrap().path, "/m107");
        assert_invariants(&state);
    }

    #[test]
    fn closing_rightmost_active_tab_falls_back_left() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        state.navigate("/shell");
        let last_id = state.tabs()[1].id.clone();

        let cmd = state.close_tab(&last_id);
        assert_eq!(cmd, Some(NavCommand::Render("/overview".to_string())));
        assert_eq!(state.active_tab().unwrap().path, "/overview");
        assert_invariants(&state);
    }

    #[test]
    fn closing_last_tab_clears_and_renders_root() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        let id = state.active_tab_id().unwrap().to_string();

        let cmd = state.close_tab(&id);
        assert_eq!(cmd, Some(NavCommand::Render(ROOT_PATH.to_string())));
        assert!(state.is_empty());
        assert!(state.active_tab_id().is_none());
        assert_invariants(&state);
    }

    #[test]
    fn closing_inactive_tab_keeps_active_unchanged() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        state.navigate("/shell");
        let inactive_id = state.tabs()[0].id.clone();
        let active_id = state.active_tab_id().unwrap().to_string();

        let cmd = state.close_tab(&inactive_id);
        assert_eq!(cmd, None);
        assert_eq!(state.tabs().len(), 1);
        assert_eq!(state.active_tab_id(), Some(active_id.as_str()));
        assert_invariants(&state);
    }

    #[test]
    fn unknown_ids_are_silently_ignored() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        let snapshot = state.clone();

        assert_eq!(state.activate_tab("missing"), None);
        assert_eq!(state.close_tab("missing"), None);
        state.update_tab("missing", TabUpdate::default());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn update_tab_merges_partial_fields() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        let id = state.active_tab_id().unwrap().to_string();

        state.update_tab(
            &id,
            TabUpdate {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        );
        let tab = state.active_tab().unwrap();
        assert_eq!(tab.title, "Renamed");
        assert_eq!(tab.path, "/overview", "untouched fields are kept");
    }

    #[test]
    fn external_route_change_activates_existing_tab() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        state.navigate("/shell");
        state.on_external_route_change("/overview");
        assert_eq!(state.active_tab().unwrap().path, "/overview");
        assert_invariants(&state);
    }

    #[test]
    fn external_route_change_replaces_active_in_place() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        let id = state.active_tab_id().unwrap().to_string();

        state.on_external_route_change("/personnel");
        assert_eq!(state.tabs().len(), 1);
        let tab = state.active_tab().unwrap();
        assert_eq!(tab.id, id);
        assert_eq!(tab.path, "/personnel");
        assert_eq!(tab.title, "Personnel");
    }

    #[test]
    fn external_route_change_seeds_first_tab() {
        let mut state = TabsState::new();
        state.on_external_route_change("/workspace/S007");
        assert_eq!(state.tabs().len(), 1);
        let tab = state.active_tab().unwrap();
        assert_eq!(tab.title, "Shift S007 - Workspace");
        assert_eq!(tab.parent_id.as_deref(), Some("workspace"));
        assert_invariants(&state);
    }

    #[test]
    fn external_route_change_ignores_login_and_bootstrap_root() {
        let mut state = TabsState::new();
        state.on_external_route_change("/login");
        assert!(state.is_empty());

        state.navigate("/overview");
        let snapshot = state.clone();
        state.on_external_route_change("/login");
        assert_eq!(state, snapshot);

        // Root is ignored for replace-in-place, but an existing "/" tab
        // would still be activated by the first branch.
        state.navigate("/shell");
        state.on_external_route_change("/");
        assert_eq!(state.active_tab().unwrap().path, "/shell");
    }

    #[test]
    fn sectionless_path_opens_new_tab_instead_of_replacing() {
        // An empty path resolves to no section, so it can never replace the
        // active tab, whatever that tab's section is.
        let mut state = TabsState::new();
        state.navigate("/overview");
        let cmd = state.navigate("");
        assert_eq!(cmd, None);
        assert_eq!(state.tabs().len(), 2);
        assert_eq!(state.active_tab().unwrap().parent_id, None);
        assert_invariants(&state);
    }

    #[test]
    fn unknown_path_still_gets_a_tab_with_fallback_title() {
        let mut state = TabsState::new();
        state.navigate("/does-not-exist");
        assert_eq!(state.active_tab().unwrap().title, "Page Not Found");
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = TabsState::new();
        state.navigate("/overview");
        state.navigate("/shell");
        state.clear();
        assert!(state.is_empty());
        assert!(state.active_tab_id().is_none());
    }

    #[test]
    fn invariant_holds_over_mixed_sequences() {
        let mut state = TabsState::new();
        let paths = [
            "/overview",
            "/workspace",
            "/workspace/S001",
            "/workspace/S002",
            "/shell",
            "/m107",
            "/overview",
        ];
        for path in paths {
            state.navigate(path);
            assert_invariants(&state);
        }
        while let Some(id) = state.active_tab_id().map(str::to_string) {
            state.close_tab(&id);
            assert_invariants(&state);
        }
        assert!(state.is_empty());
    }
}
