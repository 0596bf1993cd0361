//! Downstream handler seam.
//!
//! The automation engine that consumes decoded events lives outside this
//! service; its interface here is the narrowest possible: take one decoded
//! event and its delivery ID. The default sink only logs, which keeps the
//! ingestion layer runnable on its own.

use crate::events::DecodedEvent;
use crate::types::DeliveryId;

/// Receives successfully decoded events.
///
/// Implementations must be cheap and non-blocking; anything slow belongs
/// behind a queue owned by the implementation.
pub trait EventSink: Send + Sync {
    /// Hands over one decoded event. Called at most once per delivery.
    fn deliver(&self, delivery_id: &DeliveryId, event: DecodedEvent);
}

/// An [`EventSink`] that emits a structured log line per event.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn deliver(&self, delivery_id: &DeliveryId, event: DecodedEvent) {
        tracing::info!(
            delivery_id = %delivery_id,
            event_type = %event.event_type(),
            "Decoded webhook event"
        );
    }
}
