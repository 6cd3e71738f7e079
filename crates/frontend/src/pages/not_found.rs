use crate::pages::frame::PageFrame;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame title="Page Not Found">
            <p>"There is no view registered for this address."</p>
        </PageFrame>
    }
}
