use tokio::sync::watch;

/// Per-task view of the shutdown signal
pub struct ShutdownGuard {
    state: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub(crate) fn new(state: watch::Receiver<bool>) -> Self {
        Self { state }
    }

    /// Resolves once shutdown has been triggered, immediately if it already was.
    pub async fn wait(&mut self) {
        if self.state.wait_for(|triggered| *triggered).await.is_err() {
            // Coordinator dropped without triggering; never resolve
            std::future::pending::<()>().await;
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.state.borrow()
    }
}
