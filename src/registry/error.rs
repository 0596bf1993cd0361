//! Error types for schema registration and payload decoding.

use thiserror::Error;

/// Error type for webhook decode failures.
///
/// All three kinds are recoverable at the call boundary: each decode call is
/// independent and stateless, so a failure affects only the one event being
/// decoded. The decoder never logs, retries, or swallows an error; it returns
/// a precise value and the caller decides (ack-and-drop, ack-and-alert,
/// dead-letter). Re-decoding the same bytes deterministically reproduces the
/// same result, which is why the variants are `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No schema is registered for this event-type tag.
    ///
    /// Recoverable: the caller should acknowledge and drop the event rather
    /// than retry.
    #[error("unknown event type {0:?}")]
    UnknownEventType(String),

    /// The payload is not a well-formed JSON object at the top level.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A field the schema declares required is absent, null, or of the wrong
    /// shape. `path` is the full dotted path of the offending field.
    #[error("schema violation at {path}: expected {expected}")]
    SchemaViolation {
        path: String,
        expected: &'static str,
    },
}

impl DecodeError {
    /// Shorthand constructor used by the field extraction helpers.
    pub(crate) fn violation(path: impl Into<String>, expected: &'static str) -> Self {
        DecodeError::SchemaViolation {
            path: path.into(),
            expected,
        }
    }

    /// Returns the offending field path for schema violations.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            DecodeError::SchemaViolation { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Error type for schema registry construction.
///
/// Registration happens once at process startup; these errors are
/// configuration errors and are never produced at request time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An event-type tag was registered twice. Each tag maps to exactly one
    /// schema.
    #[error("event type {0:?} is already registered")]
    DuplicateEventType(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_violation_display_names_path() {
        let err = DecodeError::violation("repository.full_name", "string");
        assert_eq!(
            err.to_string(),
            "schema violation at repository.full_name: expected string"
        );
        assert_eq!(err.field_path(), Some("repository.full_name"));
    }

    #[test]
    fn field_path_is_none_for_other_kinds() {
        assert_eq!(
            DecodeError::UnknownEventType("ping".into()).field_path(),
            None
        );
        assert_eq!(
            DecodeError::MalformedPayload("eof".into()).field_path(),
            None
        );
    }
}
