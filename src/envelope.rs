//! The raw inbound webhook message.

use chrono::{DateTime, Utc};

use crate::types::DeliveryId;

/// One webhook delivery as received from the wire, before any decoding.
///
/// Immutable once constructed; the decoder borrows it for the duration of a
/// single decode call and never mutates it.
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    /// The event-type tag (the `X-GitHub-Event` header value),
    /// e.g. "pull_request" or "check_run".
    pub event_type: String,

    /// The unique delivery ID assigned by the sender.
    pub delivery_id: DeliveryId,

    /// When this process received the delivery.
    pub received_at: DateTime<Utc>,

    /// The raw payload body, untouched.
    pub payload: Vec<u8>,
}

impl EventEnvelope {
    /// Creates an envelope stamped with the current time.
    pub fn new(
        event_type: impl Into<String>,
        delivery_id: DeliveryId,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        EventEnvelope {
            event_type: event_type.into(),
            delivery_id,
            received_at: Utc::now(),
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_received_at() {
        let before = Utc::now();
        let envelope = EventEnvelope::new(
            "pull_request",
            DeliveryId::new("550e8400-e29b-41d4-a716-446655440000"),
            br#"{}"#.to_vec(),
        );
        let after = Utc::now();

        assert!(envelope.received_at >= before);
        assert!(envelope.received_at <= after);
        assert_eq!(envelope.event_type, "pull_request");
        assert_eq!(envelope.payload, b"{}");
    }
}
