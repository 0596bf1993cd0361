//! Field extraction by dotted path over a parsed JSON payload.
//!
//! Decoders declare the fields they require by extracting them through these
//! helpers; anything not extracted is never inspected, so unknown or newly
//! added payload fields can never break decoding.
//!
//! The helpers distinguish required fields (absent or null is a
//! [`DecodeError::SchemaViolation`] naming the path) from optional ones
//! (absent or null is `Ok(None)`; present but wrongly shaped is still a
//! violation).

use serde_json::Value;

use crate::types::Sha;

use super::error::DecodeError;

/// Walks `root` along a dotted path ("repository.owner.login").
fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Returns true if a field is present and non-null.
///
/// Used for presence-only markers, e.g. `issue.pull_request` distinguishing a
/// PR comment from an issue comment. The marker's contents are never parsed.
pub(crate) fn present(root: &Value, path: &str) -> bool {
    lookup(root, path).is_some_and(|v| !v.is_null())
}

pub(crate) fn required_str<'a>(root: &'a Value, path: &'static str) -> Result<&'a str, DecodeError> {
    match lookup(root, path) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(DecodeError::violation(path, "string")),
    }
}

pub(crate) fn required_u64(root: &Value, path: &'static str) -> Result<u64, DecodeError> {
    match lookup(root, path).and_then(Value::as_u64) {
        Some(n) => Ok(n),
        None => Err(DecodeError::violation(path, "unsigned integer")),
    }
}

pub(crate) fn required_sha(root: &Value, path: &'static str) -> Result<Sha, DecodeError> {
    let raw = required_str(root, path)?;
    Sha::parse(raw).map_err(|_| DecodeError::violation(path, "40-character hex commit sha"))
}

/// Extracts a required JSON array, yielding `(index-qualified path, element)`
/// pairs so element-level violations carry paths like
/// `check_suite.pull_requests[2].number`.
pub(crate) fn required_array<'a>(
    root: &'a Value,
    path: &'static str,
) -> Result<impl Iterator<Item = (String, &'a Value)>, DecodeError> {
    match lookup(root, path) {
        Some(Value::Array(items)) => Ok(items
            .iter()
            .enumerate()
            .map(move |(i, item)| (format!("{path}[{i}]"), item))),
        _ => Err(DecodeError::violation(path, "array")),
    }
}

/// Extracts an unsigned integer field from an array element produced by
/// [`required_array`].
pub(crate) fn element_u64(
    element: &Value,
    element_path: &str,
    field: &str,
) -> Result<u64, DecodeError> {
    match element.get(field).and_then(Value::as_u64) {
        Some(n) => Ok(n),
        None => Err(DecodeError::violation(
            format!("{element_path}.{field}"),
            "unsigned integer",
        )),
    }
}

pub(crate) fn optional_str(root: &Value, path: &'static str) -> Result<Option<String>, DecodeError> {
    match lookup(root, path) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::violation(path, "string or null")),
    }
}

pub(crate) fn optional_bool(root: &Value, path: &'static str) -> Result<Option<bool>, DecodeError> {
    match lookup(root, path) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(DecodeError::violation(path, "boolean or null")),
    }
}

pub(crate) fn optional_u64(root: &Value, path: &'static str) -> Result<Option<u64>, DecodeError> {
    match lookup(root, path) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| DecodeError::violation(path, "unsigned integer or null")),
    }
}

pub(crate) fn optional_sha(root: &Value, path: &'static str) -> Result<Option<Sha>, DecodeError> {
    match optional_str(root, path)? {
        None => Ok(None),
        Some(raw) => Sha::parse(&raw)
            .map(Some)
            .map_err(|_| DecodeError::violation(path, "40-character hex commit sha or null")),
    }
}
