/// Configuration for WebSocket sessions
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outgoing frames buffered per session
    pub send_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 100,
        }
    }
}
