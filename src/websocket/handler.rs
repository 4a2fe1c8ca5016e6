use crate::{anagram::AnagramIndex, AppState};
use axum::{
    extract::{
        ws::{rejection::WebSocketUpgradeRejection, Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;

/// Subprotocol clients must offer to open a session
pub const PUZZLE_PROTOCOL: &str = "puzzle";

/// WebSocket upgrade handler for solving sessions.
///
/// The subprotocol is checked before the upgrade itself, so a client that
/// doesn't offer `puzzle` gets `400` even on an otherwise valid handshake.
pub async fn handle_websocket(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    if !offers_puzzle_protocol(&headers) {
        tracing::debug!("Refusing WebSocket upgrade without '{}' subprotocol", PUZZLE_PROTOCOL);
        return StatusCode::BAD_REQUEST.into_response();
    }

    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => return rejection.into_response(),
    };

    ws.protocols([PUZZLE_PROTOCOL])
        .on_upgrade(move |socket| handle_socket(socket, state))
}

fn offers_puzzle_protocol(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::SEC_WEBSOCKET_PROTOCOL)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|protocol| protocol.trim() == PUZZLE_PROTOCOL)
}

/// Each inbound frame is a raw query; each reply lists the matches, one per
/// line.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let idle_timeout = state.config.session_idle_timeout();

    tracing::info!("Puzzle session opened");

    loop {
        let msg = match tokio::time::timeout(idle_timeout, receiver.next()).await {
            Ok(Some(Ok(msg))) => msg,
            Ok(Some(Err(e))) => {
                tracing::debug!("Puzzle session read failed: {}", e);
                break;
            }
            Ok(None) => break,
            Err(_) => {
                tracing::info!("Closing puzzle session idle for {:?}", idle_timeout);
                let _ = sender.send(Message::Close(None)).await;
                break;
            }
        };

        let raw = match msg {
            Message::Text(text) => text.as_str().to_owned(),
            Message::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Message::Close(_) => break,
            _ => continue,
        };

        let reply = solution_frame(&state.index, &raw);
        if let Err(e) = sender.send(Message::Text(reply.into())).await {
            tracing::debug!("Puzzle session write failed: {}", e);
            break;
        }
    }

    tracing::info!("Puzzle session closed");
}

/// Matching words, each terminated by a newline
fn solution_frame(index: &AnagramIndex, raw: &str) -> String {
    index
        .solve(raw)
        .into_iter()
        .map(|word| word + "\n")
        .collect()
}
