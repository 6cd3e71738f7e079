use crate::layout::tabs::state::{NavCommand, TabSpec, TabUpdate, TabsState};
use crate::routes::router;
use leptos::prelude::*;

/// The shell-wide store: the tab collection plus layout toggles.
///
/// The tab state itself is a plain value behind one `RwSignal`; the view
/// layer reads snapshots and issues intents through the methods below, which
/// also execute whatever router command an operation produced.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabsState>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabsState::new()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab for the current URL and keeps the address bar in
    /// sync with the active tab from then on. Called once when the main
    /// layout mounts.
    pub fn init_router_integration(&self) {
        self.on_external_route_change(&router::current_path());

        let this = *self;
        Effect::new(move |_| {
            if let Some(path) = this.tabs.with(|t| t.active_tab().map(|tab| tab.path.clone())) {
                router::render_path(&path);
            }
        });

        router::on_path_change(move |path| this.on_external_route_change(&path));
    }

    /// Tab-initiated navigation: sidebar clicks, table actions.
    pub fn navigate(&self, path: &str) {
        let mut cmd = None;
        self.tabs.update(|t| cmd = t.navigate(path));
        self.run(cmd);
    }

    pub fn activate_tab(&self, id: &str) {
        let mut cmd = None;
        self.tabs.update(|t| cmd = t.activate_tab(id));
        self.run(cmd);
    }

    pub fn close_tab(&self, id: &str) {
        let mut cmd = None;
        self.tabs.update(|t| cmd = t.close_tab(id));
        self.run(cmd);
    }

    pub fn add_tab(&self, spec: TabSpec) {
        self.tabs.update(|t| t.add_tab(spec));
    }

    pub fn update_tab(&self, id: &str, updates: TabUpdate) {
        self.tabs.update(|t| t.update_tab(id, updates));
    }

    /// Router-initiated reconciliation: never reissues a router command.
    pub fn on_external_route_change(&self, path: &str) {
        self.tabs.update(|t| t.on_external_route_change(path));
    }

    pub fn clear_tabs(&self) {
        self.tabs.update(|t| t.clear());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    fn run(&self, cmd: Option<NavCommand>) {
        if let Some(NavCommand::Render(path)) = cmd {
            router::render_path(&path);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
