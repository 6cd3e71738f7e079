//! API client for the inspection service.
//!
//! The service runs next to the UI on port 8080; both the HTTP base and the
//! socket URL are derived from the page's own hostname.

use contracts::domain::workspace::WatchAttachRequest;
use gloo_net::http::Request;

const SERVICE_PORT: u16 = 8080;

fn hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

fn http_base_for(host: &str) -> String {
    format!("http://{}:{}", host, SERVICE_PORT)
}

fn ws_url_for(host: &str) -> String {
    format!("ws://{}:{}/ws", host, SERVICE_PORT)
}

pub fn ws_url() -> String {
    ws_url_for(&hostname())
}

/// Start watching a directory for captured shell images
pub async fn attach_watch(request: WatchAttachRequest) -> Result<(), String> {
    let response = Request::post(&format!("{}/watch/attach", http_base_for(&hostname())))
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("Attach failed: HTTP {}", response.status()))
    }
}

/// Stop watching a directory
pub async fn detach_watch(directory: &str) -> Result<(), String> {
    let response = Request::get(&format!("{}/watch/detach", http_base_for(&hostname())))
        .query([("directory", directory)])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("Detach failed: HTTP {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_target_the_service_port() {
        assert_eq!(http_base_for("localhost"), "http://localhost:8080");
        assert_eq!(ws_url_for("10.0.0.5"), "ws://10.0.0.5:8080/ws");
    }
}
