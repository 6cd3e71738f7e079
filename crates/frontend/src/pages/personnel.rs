use crate::pages::frame::PageFrame;
use leptos::prelude::*;

#[component]
pub fn PersonnelPage() -> impl IntoView {
    view! {
        <PageFrame title="Personnel">
            <p>"Operator and inspector roster."</p>
        </PageFrame>
    }
}
