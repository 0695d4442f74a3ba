use crate::{AppState, Result as WsErrorResult, WsError};

use chat_core::ChatMessage;

use std::panic::Location;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use error_location::ErrorLocation;
use log::{debug, info};

/// Echo upgrade handler. Replies to each envelope with the same text from
/// the server; never touches the registry or the dispatcher.
pub async fn echo_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |mut socket| async move {
        let mut shutdown_guard = state.shutdown.subscribe_guard();

        tokio::select! {
            result = echo_loop(&mut socket) => {
                if let Err(e) = result {
                    debug!("Echo session ended: {e}");
                }
            }
            _ = shutdown_guard.wait() => {
                info!("Closing echo session for shutdown");
            }
        }
    })
}

async fn echo_loop(socket: &mut WebSocket) -> WsErrorResult<()> {
    while let Some(frame) = socket.recv().await {
        let frame = frame.map_err(|e| WsError::connection_closed(format!("WebSocket error: {e}")))?;

        let text = match frame {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let inbound: ChatMessage =
            serde_json::from_str(text.as_str()).map_err(|e| WsError::InvalidMessage {
                message: format!("not a chat envelope: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let reply = serde_json::to_string(&ChatMessage::from_server(inbound.text))?;
        socket
            .send(Message::Text(reply.into()))
            .await
            .map_err(|e| WsError::connection_closed(format!("write failed: {e}")))?;
    }

    Ok(())
}
