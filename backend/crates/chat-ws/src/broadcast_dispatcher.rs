use crate::{
    ConnectionRegistry, Metrics, QueueCapacity, Result as WsErrorResult, SessionHandle,
    ShutdownGuard, WsError,
};

use chat_core::ChatMessage;

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, error, info, warn};
use tokio::sync::mpsc;

enum IntakeSender {
    Bounded(mpsc::Sender<ChatMessage>),
    Unbounded(mpsc::UnboundedSender<ChatMessage>),
}

impl Clone for IntakeSender {
    fn clone(&self) -> Self {
        match self {
            Self::Bounded(tx) => Self::Bounded(tx.clone()),
            Self::Unbounded(tx) => Self::Unbounded(tx.clone()),
        }
    }
}

enum IntakeReceiver {
    Bounded(mpsc::Receiver<ChatMessage>),
    Unbounded(mpsc::UnboundedReceiver<ChatMessage>),
}

impl IntakeReceiver {
    async fn recv(&mut self) -> Option<ChatMessage> {
        match self {
            Self::Bounded(rx) => rx.recv().await,
            Self::Unbounded(rx) => rx.recv().await,
        }
    }
}

/// Publishing half of the broadcast channel. Cheap to clone.
#[derive(Clone)]
pub struct BroadcastDispatcher {
    intake: IntakeSender,
    metrics: Metrics,
}

/// Single consumer of the intake queue.
///
/// Messages are fanned out one at a time in arrival order, so every live
/// session sees them in the order they were published.
pub struct DispatchLoop {
    intake: IntakeReceiver,
    registry: ConnectionRegistry,
    metrics: Metrics,
}

/// Outcome of delivering one message to a registry snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub attempted: usize,
    pub delivered: usize,
    pub removed: Vec<SessionHandle>,
    /// Rendered `DeliveryFailed` errors, one per removed session
    pub failures: Vec<String>,
}

impl BroadcastDispatcher {
    pub fn new(
        registry: ConnectionRegistry,
        capacity: QueueCapacity,
        metrics: Metrics,
    ) -> (Self, DispatchLoop) {
        let (intake_tx, intake_rx) = match capacity {
            QueueCapacity::Bounded(size) => {
                let (tx, rx) = mpsc::channel(size.max(1));
                (IntakeSender::Bounded(tx), IntakeReceiver::Bounded(rx))
            }
            QueueCapacity::Unbounded => {
                let (tx, rx) = mpsc::unbounded_channel();
                (IntakeSender::Unbounded(tx), IntakeReceiver::Unbounded(rx))
            }
        };

        let dispatcher = Self {
            intake: intake_tx,
            metrics: metrics.clone(),
        };
        let dispatch_loop = DispatchLoop {
            intake: intake_rx,
            registry,
            metrics,
        };

        (dispatcher, dispatch_loop)
    }

    /// Enqueue `message` for every live session.
    ///
    /// With a bounded queue this waits while the queue is full.
    pub async fn publish(&self, message: ChatMessage) -> WsErrorResult<()> {
        let sent = match &self.intake {
            IntakeSender::Bounded(tx) => tx.send(message).await.is_ok(),
            IntakeSender::Unbounded(tx) => tx.send(message).is_ok(),
        };

        if !sent {
            return Err(WsError::DispatcherStopped {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.metrics.message_published();
        Ok(())
    }
}

impl DispatchLoop {
    /// Drain the intake queue until shutdown or until every publisher is gone.
    pub async fn run(mut self, mut shutdown: ShutdownGuard) {
        info!("Broadcast dispatcher started");

        loop {
            tokio::select! {
                message = self.intake.recv() => match message {
                    Some(message) => {
                        self.fan_out(&message).await;
                    }
                    None => {
                        info!("All publishers dropped, dispatcher stopping");
                        break;
                    }
                },
                _ = shutdown.wait() => {
                    info!("Broadcast dispatcher shutting down");
                    break;
                }
            }
        }
    }

    /// Deliver one message to every session in the current registry snapshot.
    ///
    /// A session whose delivery fails is removed and closed; the pass still
    /// continues with the remaining sessions.
    pub async fn fan_out(&self, message: &ChatMessage) -> FanOutReport {
        let frame = match serde_json::to_string(message) {
            Ok(frame) => frame,
            Err(e) => {
                error!("Failed to encode chat message: {e}");
                return FanOutReport::default();
            }
        };

        let sessions = self.registry.snapshot().await;
        let mut report = FanOutReport {
            attempted: sessions.len(),
            ..Default::default()
        };

        for session in sessions {
            match session.transport.send_text(&frame).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    let failure = WsError::delivery_failed(session.handle, e.to_string());
                    warn!("{failure}; removing '{}'", session.display_name);
                    self.registry.remove(session.handle).await;
                    session.transport.close();
                    self.metrics.delivery_failed();
                    self.metrics.error_occurred(failure.error_code());
                    report.removed.push(session.handle);
                    report.failures.push(failure.to_string());
                }
            }
        }

        debug!(
            "Fan-out delivered {}/{} ({} removed)",
            report.delivered,
            report.attempted,
            report.removed.len()
        );
        self.metrics.broadcast_fanned_out(report.attempted);

        report
    }
}
