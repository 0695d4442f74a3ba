
use crate::{Result as WsErrorResult, Transport, WsError};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

/// Transport that records every frame, or fails every send when broken
#[derive(Default)]
pub(crate) struct RecordingTransport {
    frames: Mutex<Vec<String>>,
    broken: AtomicBool,
    attempts: AtomicUsize,
    closed: AtomicBool,
}

impl RecordingTransport {
    pub fn broken() -> Self {
        let transport = Self::default();
        transport.broken.store(true, Ordering::SeqCst);
        transport
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, text: &str) -> WsErrorResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.broken.load(Ordering::SeqCst) {
            return Err(WsError::connection_closed("peer went away"));
        }

        self.frames.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
