//! Realtime status channel.
//!
//! The server's WebSocket endpoint carries no message protocol; the
//! channel exists so the dashboard can surface live connectivity. Inbound
//! frames are drained and ignored, and the connection flag in `UiState`
//! tracks the socket lifecycle.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Path of the WebSocket endpoint, relative to the page origin.
pub const CHANNEL_PATH: &str = "/api/ws";

#[cfg(any(test, feature = "hydrate"))]
fn channel_url(protocol: &str, host: &str) -> String {
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    format!("{scheme}://{host}{CHANNEL_PATH}")
}

/// Open the status channel and mirror its lifecycle into `ui`.
///
/// Browser-only; on the server this is a no-op.
pub fn open_status_channel(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;
        use gloo_net::websocket::futures::WebSocket;

        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) else {
            return;
        };

        let ws = match WebSocket::open(&channel_url(&protocol, &host)) {
            Ok(ws) => ws,
            Err(e) => {
                log::warn!("status channel failed to open: {e}");
                return;
            }
        };

        ui.update(|u| u.realtime_connected = true);
        leptos::task::spawn_local(async move {
            let (_write, mut read) = ws.split();
            while let Some(msg) = read.next().await {
                if msg.is_err() {
                    break;
                }
                // No message protocol: nothing to dispatch.
            }
            ui.update(|u| u.realtime_connected = false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
