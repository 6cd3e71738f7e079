//! Live event channel to the inspection service.
//!
//! One socket per app instance. The read loop runs for the lifetime of the
//! page: when the socket drops (or never opens), it waits a fixed delay and
//! dials again, forever. A frame that does not decode is logged and dropped;
//! it never tears the connection down.

use contracts::live::LiveMessage;
use futures_util::StreamExt;
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api;

const RECONNECT_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    /// The channel has not been started yet.
    Idle,
    Connected,
    Reconnecting,
}

/// Shared handle to the live channel: connection status plus the decoded
/// events of this session, newest last. Views derive their tables from the
/// event list instead of mutating row state in place.
#[derive(Clone, Copy)]
pub struct LiveFeed {
    pub status: RwSignal<ChannelStatus>,
    pub events: RwSignal<Vec<LiveMessage>>,
    started: RwSignal<bool>,
}

impl LiveFeed {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(ChannelStatus::Idle),
            events: RwSignal::new(Vec::new()),
            started: RwSignal::new(false),
        }
    }

    /// Start the connection loop. Safe to call from every page that needs
    /// live data; only the first call spawns the loop.
    pub fn ensure_started(&self) {
        if self.started.get_untracked() {
            return;
        }
        self.started.set(true);

        let feed = *self;
        spawn_local(async move {
            feed.run().await;
        });
    }

    async fn run(self) {
        loop {
            match WebSocket::open(&api::ws_url()) {
                Ok(mut ws) => {
                    self.status.set(ChannelStatus::Connected);
                    while let Some(frame) = ws.next().await {
                        match frame {
                            Ok(Message::Text(text)) => match decode_frame(&text) {
                                Ok(msg) => self.push(msg),
                                Err(e) => log::warn!("Dropping malformed live frame: {}", e),
                            },
                            Ok(Message::Bytes(_)) => {
                                log::warn!("Dropping unexpected binary live frame");
                            }
                            Err(_) => break,
                        }
                    }
                }
                Err(e) => {
                    log::warn!("Live channel connect failed: {}", e);
                }
            }

            self.status.set(ChannelStatus::Reconnecting);
            TimeoutFuture::new(RECONNECT_DELAY_MS).await;
        }
    }

    fn push(&self, msg: LiveMessage) {
        self.events.update(|events| events.push(msg));
    }
}

impl Default for LiveFeed {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_frame(text: &str) -> Result<LiveMessage, String> {
    serde_json::from_str(text).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_shift_progress_frame() {
        let frame = r#"{
            "type": "shift_progress",
            "shiftNo": "S001",
            "totalAnalyze": 12,
            "approved": 10,
            "defect": 2
        }"#;
        match decode_frame(frame).unwrap() {
            LiveMessage::ShiftProgress(progress) => {
                assert_eq!(progress.shift_no, "S001");
                assert_eq!(progress.approved, 10);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_frame() {
        assert!(decode_frame("not json").is_err());
        assert!(decode_frame(r#"{"type": "mystery"}"#).is_err());
    }
}
