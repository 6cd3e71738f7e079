//! Tab content registry - the single source of truth for mapping a tab's
//! path to its View. All routed paths are matched here in one place.

use crate::layout::tabs::titles::shift_segment;
use crate::pages::ai_model::AiModelPage;
use crate::pages::m107_lots::M107LotsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::overview::OverviewPage;
use crate::pages::personnel::PersonnelPage;
use crate::pages::reports::ReportsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::shell_lots::ShellLotsPage;
use crate::pages::shift_details::ShiftDetailsPage;
use crate::pages::workspace::WorkspacePage;
use leptos::prelude::*;

/// Renders the content for a tab's path.
///
/// Unknown paths get the not-found placeholder; they are still normal tabs.
pub fn render_route(path: &str) -> AnyView {
    match path {
        "/" | "/overview" => view! { <OverviewPage /> }.into_any(),
        "/workspace" => view! { <WorkspacePage /> }.into_any(),
        "/shell" => view! { <ShellLotsPage /> }.into_any(),
        "/m107" => view! { <M107LotsPage /> }.into_any(),
        "/personnel" => view! { <PersonnelPage /> }.into_any(),
        "/reports" => view! { <ReportsPage /> }.into_any(),
        "/settings" => view! { <SettingsPage /> }.into_any(),
        "/ai-model" => view! { <AiModelPage /> }.into_any(),
        p if shift_segment(p).is_some() => {
            let shift_no = shift_segment(p).unwrap_or_default().to_string();
            view! { <ShiftDetailsPage shift_no=shift_no /> }.into_any()
        }
        other => {
            log::warn!("no registered view for path: {other}");
            view! { <NotFoundPage /> }.into_any()
        }
    }
}
