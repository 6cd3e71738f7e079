use leptos::prelude::*;

/// Common page chrome: a heading plus the page body.
#[component]
pub fn PageFrame(
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">{title}</h1>
            <div class="page__body">{children()}</div>
        </div>
    }
}
