use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from localStorage, if one was saved.
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
