use crate::{Result as WsErrorResult, WsError};

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::Message;
use tokio::sync::{Notify, mpsc};

/// Send side of a session, as seen by the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver one text frame. May wait while the session's buffer is full.
    async fn send_text(&self, text: &str) -> WsErrorResult<()>;

    /// Tell the session to end. Idempotent.
    fn close(&self);
}

/// Transport backed by a session's outgoing frame channel.
///
/// The session task owns the socket; this only queues frames for it.
pub struct WsTransport {
    sender: mpsc::Sender<Message>,
    closed: Arc<Notify>,
}

impl WsTransport {
    pub fn new(sender: mpsc::Sender<Message>) -> Self {
        Self {
            sender,
            closed: Arc::new(Notify::new()),
        }
    }

    /// Resolves once [`Transport::close`] has been called.
    pub async fn closed(&self) {
        self.closed.notified().await;
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send_text(&self, text: &str) -> WsErrorResult<()> {
        self.sender
            .send(Message::Text(text.into()))
            .await
            .map_err(|_| WsError::connection_closed("outgoing channel closed"))
    }

    fn close(&self) {
        self.closed.notify_one();
        let _ = self.sender.try_send(Message::Close(None));
    }
}
