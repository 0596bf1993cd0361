//! Event schema registry and decoder.
//!
//! Maps an inbound `(event-type tag, raw payload bytes)` pair to a typed
//! [`DecodedEvent`], or fails with a precise [`DecodeError`].
//!
//! # Decoding strategy
//!
//! 1. The schema for the tag is looked up; unknown tags fail with
//!    [`DecodeError::UnknownEventType`] (the caller should ack and drop).
//! 2. The payload is parsed as JSON; anything that is not an object at the
//!    top level fails with [`DecodeError::MalformedPayload`].
//! 3. The schema extracts only its declared fields; a required field that is
//!    absent or wrongly shaped fails with [`DecodeError::SchemaViolation`]
//!    naming the field path. Undeclared fields are never inspected, so
//!    upstream payload growth cannot break decoding.
//!
//! The registry is built once at startup and is immutable afterwards. The
//! decoder is a pure function of its inputs: it holds no mutable state, so it
//! is safe to call concurrently through a shared reference, and decoding the
//! same input twice yields the same result.

use std::collections::HashMap;

use serde_json::Value;

use crate::envelope::EventEnvelope;
use crate::events::{self, DecodedEvent};

pub mod error;
pub(crate) mod fields;

pub use error::{DecodeError, RegistryError};

/// A decode function: the executable form of one event type's partial schema.
///
/// The function declares, by what it extracts, exactly which payload fields
/// the event type requires and which it treats as optional.
pub type EventDecoder = fn(&Value) -> Result<DecodedEvent, DecodeError>;

/// The event types this service consumes, with their schemas.
const BUILTIN: &[(&str, EventDecoder)] = &[
    ("pull_request", events::pull_request::decode),
    ("pull_request_review", events::pull_request_review::decode),
    ("check_run", events::check_run::decode),
    ("check_suite", events::check_suite::decode),
    ("status", events::status::decode),
    ("issue_comment", events::issue_comment::decode),
    ("push", events::push::decode),
];

/// An immutable lookup from event-type tag to decode function.
///
/// Constructed explicitly at startup and passed (typically behind an `Arc`)
/// into whatever receives deliveries; never mutated afterwards.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    decoders: HashMap<&'static str, EventDecoder>,
}

impl SchemaRegistry {
    /// Creates a registry with no schemas registered.
    pub fn empty() -> Self {
        SchemaRegistry::default()
    }

    /// Creates a registry with the builtin event set registered.
    ///
    /// # Errors
    ///
    /// Fails if the builtin table registers a tag twice; this is a
    /// configuration error surfaced at startup.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = SchemaRegistry::empty();
        for (event_type, decoder) in BUILTIN {
            registry.register(event_type, *decoder)?;
        }
        Ok(registry)
    }

    /// Associates an event-type tag with its schema.
    ///
    /// Each tag maps to exactly one schema. Re-registering a tag is a
    /// configuration error reported at startup, never at request time.
    pub fn register(
        &mut self,
        event_type: &'static str,
        decoder: EventDecoder,
    ) -> Result<(), RegistryError> {
        if self.decoders.contains_key(event_type) {
            return Err(RegistryError::DuplicateEventType(event_type));
        }
        self.decoders.insert(event_type, decoder);
        Ok(())
    }

    /// Returns true if a schema is registered for this tag.
    pub fn is_registered(&self, event_type: &str) -> bool {
        self.decoders.contains_key(event_type)
    }

    /// Returns the registered event-type tags, in no particular order.
    pub fn event_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.keys().copied()
    }

    /// Decodes a raw payload according to the schema registered for
    /// `event_type`.
    ///
    /// Stateless and deterministic: the same `(event_type, payload)` pair
    /// always yields the same result, so no retry is performed here - retry
    /// policy, if any, belongs to the caller.
    pub fn decode(&self, event_type: &str, payload: &[u8]) -> Result<DecodedEvent, DecodeError> {
        let decoder = self
            .decoders
            .get(event_type)
            .ok_or_else(|| DecodeError::UnknownEventType(event_type.to_string()))?;

        let root: Value = serde_json::from_slice(payload)
            .map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
        if !root.is_object() {
            return Err(DecodeError::MalformedPayload(
                "top-level value is not a JSON object".to_string(),
            ));
        }

        decoder(&root)
    }

    /// Decodes one delivery envelope.
    pub fn decode_envelope(&self, envelope: &EventEnvelope) -> Result<DecodedEvent, DecodeError> {
        self.decode(&envelope.event_type, &envelope.payload)
    }
}
