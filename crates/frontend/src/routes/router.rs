//! Query-string router bridge.
//!
//! The shell is served as one static page, so the current path rides in the
//! `?path=` query parameter. Writes go through `history.replace_state` (no
//! reload) and are skipped when the URL already matches, so reissuing the
//! same render command is harmless. `popstate` - back/forward navigation or
//! a manual URL edit - is the only external route-change source.

use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

const PATH_PARAM: &str = "path";

pub const DEFAULT_PATH: &str = "/";

/// Reads the current path from the address bar.
pub fn current_path() -> String {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(PATH_PARAM)
        .cloned()
        .unwrap_or_else(|| DEFAULT_PATH.to_string())
}

/// Mirrors a path into the address bar. No-op when already current.
pub fn render_path(path: &str) {
    if current_path() == path {
        return;
    }
    let query = serde_qs::to_string(&HashMap::from([(
        PATH_PARAM.to_string(),
        path.to_string(),
    )]))
    .unwrap_or_default();
    let new_url = format!("?{}", query);

    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}

/// Subscribes to browser-initiated path changes (back/forward navigation).
pub fn on_path_change(handler: impl Fn(String) + 'static) {
    let closure = Closure::<dyn Fn()>::new(move || handler(current_path()));
    if let Some(w) = window() {
        let _ = w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
