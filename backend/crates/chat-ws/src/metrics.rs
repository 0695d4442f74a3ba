use metrics::{counter, gauge};

/// Metrics collector for chat sessions and broadcast
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "chat_ws" }
    }

    pub fn connection_established(&self, anonymous: bool) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        if anonymous {
            counter!(format!("{}.connections.anonymous", self.prefix)).increment(1);
        }
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn message_received(&self) {
        counter!(format!("{}.messages.received", self.prefix)).increment(1);
    }

    pub fn message_published(&self) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
    }

    pub fn broadcast_fanned_out(&self, recipients: usize) {
        counter!(format!("{}.broadcast.deliveries", self.prefix)).increment(recipients as u64);
        gauge!(format!("{}.broadcast.recipients", self.prefix)).set(recipients as f64);
    }

    pub fn delivery_failed(&self) {
        counter!(format!("{}.broadcast.delivery_failures", self.prefix)).increment(1);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
