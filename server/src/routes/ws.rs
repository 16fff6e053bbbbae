//! WebSocket endpoint for the realtime status channel.
//!
//! LIFECYCLE
//! =========
//! 1. Cookie-authenticated upgrade via the `AuthUser` extractor
//! 2. Register in the hub, log client id + connected count
//! 3. Drain inbound messages until the peer closes (no message protocol)
//! 4. Unregister + log
//!
//! The hub handle arrives through `AppState`, which is fully constructed
//! before the router exists; there is no lazily-initialized channel state.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tracing::info;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/ws`: upgrade an authenticated session onto the channel.
pub async fn handle_ws(State(state): State<AppState>, auth: AuthUser, ws: WebSocketUpgrade) -> Response {
    let user_id = auth.user.id;
    ws.on_upgrade(move |socket| run_ws(socket, state, user_id))
}

async fn run_ws(mut socket: WebSocket, state: AppState, user_id: Uuid) {
    let client_id = Uuid::new_v4();
    let connected = state.realtime.register(client_id).await;
    info!(%client_id, %user_id, connected, "ws: client connected");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Close(_) => break,
            // No message protocol: anything else is dropped.
            _ => {}
        }
    }

    let connected = state.realtime.unregister(client_id).await;
    info!(%client_id, connected, "ws: client disconnected");
}
