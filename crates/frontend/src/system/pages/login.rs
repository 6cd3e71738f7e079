use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{mock, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match mock::login(username_val, password_val).await {
                Ok(user) => {
                    storage::save_session(&user);

                    // Land where the user was originally heading, or on the
                    // overview. Setting the auth state swaps in MainLayout,
                    // which picks the tab up from the URL.
                    let target =
                        storage::take_redirect().unwrap_or_else(|| "/overview".to_string());
                    router::render_path(&target);

                    set_auth_state.set(AuthState { user: Some(user) });
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"True Sight"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="admin"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="admin123"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo accounts:"</p>
                    <p>"admin / " <strong>"admin123"</strong></p>
                    <p>"user / " <strong>"user123"</strong></p>
                </div>
            </div>
        </div>
    }
}
