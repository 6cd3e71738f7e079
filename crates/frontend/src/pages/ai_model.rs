use crate::pages::frame::PageFrame;
use leptos::prelude::*;

#[component]
pub fn AiModelPage() -> impl IntoView {
    view! {
        <PageFrame title="AI Model">
            <p>"Detection model configuration."</p>
        </PageFrame>
    }
}
