//! Terminal notification sink

use shared::{trace_event, NotificationSink, ViewEvent};

/// Buffers confirmations until the session prints them; events go to `tracing`
#[derive(Debug, Default)]
pub struct ConsoleSink {
    pending: Vec<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every confirmation raised since the last drain
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl NotificationSink for ConsoleSink {
    fn alert(&mut self, message: &str) {
        tracing::info!(target: "alert", "{}", message);
        self.pending.push(message.to_string());
    }

    fn notify(&mut self, event: &ViewEvent) {
        trace_event(event);
    }
}
