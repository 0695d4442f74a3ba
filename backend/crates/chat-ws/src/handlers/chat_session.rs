use crate::{
    BroadcastDispatcher, ConnectionRegistry, Metrics, Result as WsErrorResult, SessionHandle,
    ShutdownGuard, WsError, WsTransport,
};

use chat_core::ChatMessage;

use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::mpsc;

/// One admitted participant of the general chat
pub struct ChatSession {
    pub handle: SessionHandle,
    pub display_name: String,
    pub transport: Arc<WsTransport>,
    pub registry: ConnectionRegistry,
    pub dispatcher: BroadcastDispatcher,
    pub metrics: Metrics,
}

impl ChatSession {
    /// Run the session until the client leaves, the dispatcher drops it, or
    /// the server shuts down. The session is removed from the registry on
    /// every exit path.
    pub async fn run(
        self,
        socket: WebSocket,
        mut outgoing: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        info!("Session {} established as '{}'", self.handle, self.display_name);

        let (mut ws_sender, mut ws_receiver) = socket.split();

        let welcome = serde_json::to_string(&ChatMessage::from_server(format!(
            "Welcome, you are {}",
            self.display_name
        )))?;

        // Sole writer to the socket; the welcome goes out before any queued broadcast
        let send_task = tokio::spawn(async move {
            if ws_sender.send(Message::Text(welcome.into())).await.is_err() {
                return;
            }
            while let Some(frame) = outgoing.recv().await {
                let is_close = matches!(frame, Message::Close(_));
                if ws_sender.send(frame).await.is_err() || is_close {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                frame = ws_receiver.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Err(e) = self.handle_text(text.as_str()).await {
                            warn!("Ending session {}: {e}", self.handle);
                            self.metrics.error_occurred(e.error_code());
                            break Err(e);
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Session {} closed by client", self.handle);
                        break Ok(());
                    }
                    Some(Ok(_)) => {
                        // binary, ping and pong carry no chat traffic
                    }
                    Some(Err(e)) => {
                        break Err(WsError::ConnectionClosed {
                            reason: format!("WebSocket error: {e}"),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                },
                _ = self.transport.closed() => {
                    info!("Session {} dropped after failed delivery", self.handle);
                    break Ok(());
                }
                _ = shutdown_guard.wait() => {
                    info!("Shutting down session {} gracefully", self.handle);
                    break Ok(());
                }
            }
        };

        self.registry.remove(self.handle).await;
        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        // Last sender gone ends the send task
        drop(self.transport);
        let _ = send_task.await;

        info!("Session {} closed", self.handle);

        result
    }

    async fn handle_text(&self, text: &str) -> WsErrorResult<()> {
        let message: ChatMessage =
            serde_json::from_str(text).map_err(|e| WsError::InvalidMessage {
                message: format!("not a chat envelope: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.metrics.message_received();
        let message = message.with_default_sender(&self.display_name);
        debug!("Session {} publishing {} bytes", self.handle, message.text.len());

        self.dispatcher.publish(message).await
    }
}
