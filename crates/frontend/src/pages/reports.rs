use crate::pages::frame::PageFrame;
use leptos::prelude::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <PageFrame title="Generate Reports">
            <p>"Shift and lot report generation."</p>
        </PageFrame>
    }
}
