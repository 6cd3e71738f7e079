use contracts::system::auth::SessionUser;
use web_sys::window;

const SESSION_KEY: &str = "truesight_user";
const REDIRECT_KEY: &str = "truesight_redirect";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in user to localStorage
pub fn save_session(user: &SessionUser) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

/// Get the saved session from localStorage. A blob that no longer
/// deserializes is removed rather than kept around to fail on every load.
pub fn load_session() -> Option<SessionUser> {
    let storage = get_local_storage()?;
    let json = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(_) => {
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Clear the saved session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Remember the path the user was heading to before being sent to login
pub fn save_redirect(path: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(REDIRECT_KEY, path);
    }
}

/// Take (read and clear) the saved post-login redirect path
pub fn take_redirect() -> Option<String> {
    let storage = get_local_storage()?;
    let path = storage.get_item(REDIRECT_KEY).ok()??;
    let _ = storage.remove_item(REDIRECT_KEY);
    Some(path)
}
