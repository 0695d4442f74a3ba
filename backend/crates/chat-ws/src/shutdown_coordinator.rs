use crate::ShutdownGuard;

use tokio::sync::watch;

/// Process-wide shutdown signal.
///
/// Backed by a watch channel so guards created after the signal still see it.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    state: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self { state }
    }

    /// Trigger shutdown (call this from the signal handler)
    pub fn shutdown(&self) {
        log::info!("Shutdown signal received, notifying all subsystems");
        self.state.send_replace(true);
    }

    pub fn is_shutdown(&self) -> bool {
        *self.state.borrow()
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self.state.subscribe())
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
