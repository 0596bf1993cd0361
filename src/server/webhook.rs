//! Webhook endpoint handler.
//!
//! Accepts webhook deliveries, verifies their signature, decodes them against
//! the schema registry, and hands decoded events to the configured sink.
//!
//! # Acknowledgment policy
//!
//! Decode failures are acknowledged with 202, not rejected: re-delivery of
//! the same bytes deterministically reproduces the same failure, so asking
//! the sender to retry only multiplies noise. Transport-level problems
//! (missing headers, bad signature) are real request errors and map to 4xx.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::AppState;
use crate::envelope::EventEnvelope;
use crate::registry::DecodeError;
use crate::signature::verify_signature;
use crate::types::DeliveryId;

/// Header name for the event-type tag.
const HEADER_EVENT: &str = "x-github-event";
/// Header name for the delivery ID.
const HEADER_DELIVERY: &str = "x-github-delivery";
/// Header name for the HMAC-SHA256 signature.
const HEADER_SIGNATURE: &str = "x-hub-signature-256";

/// Transport-level errors for webhook requests.
///
/// Decode failures are deliberately not represented here; they are
/// acknowledged, not errored.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Missing required header.
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    /// Signature did not verify against the shared secret.
    #[error("invalid signature")]
    InvalidSignature,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            WebhookError::InvalidSignature => StatusCode::UNAUTHORIZED,
        };
        (status, self.to_string()).into_response()
    }
}

/// Webhook handler.
///
/// # Request
///
/// - Method: POST
/// - Required headers:
///   - `X-GitHub-Event`: event-type tag (e.g. "pull_request")
///   - `X-GitHub-Delivery`: unique delivery ID
///   - `X-Hub-Signature-256`: HMAC-SHA256 signature of the body
/// - Body: JSON payload
///
/// # Response
///
/// - 202 Accepted: delivery acknowledged (decoded, ignored, or undecodable)
/// - 400 Bad Request: missing header
/// - 401 Unauthorized: invalid signature
pub async fn webhook_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), WebhookError> {
    let event_type = get_header(&headers, HEADER_EVENT)?;
    let delivery_id = DeliveryId::new(get_header(&headers, HEADER_DELIVERY)?);
    let signature_header = get_header(&headers, HEADER_SIGNATURE)?;

    // Verify the signature before any parsing: unauthenticated bytes never
    // reach the decoder.
    if !verify_signature(&body, &signature_header, app_state.webhook_secret()) {
        warn!(delivery_id = %delivery_id, "Invalid webhook signature");
        return Err(WebhookError::InvalidSignature);
    }

    debug!(
        delivery_id = %delivery_id,
        event_type = %event_type,
        "Received webhook"
    );

    let envelope = EventEnvelope::new(event_type, delivery_id.clone(), body.to_vec());

    match app_state.registry().decode_envelope(&envelope) {
        Ok(event) => {
            info!(
                delivery_id = %delivery_id,
                event_type = %event.event_type(),
                "Webhook decoded"
            );
            app_state.sink().deliver(&delivery_id, event);
            Ok((StatusCode::ACCEPTED, "Accepted"))
        }
        Err(DecodeError::UnknownEventType(tag)) => {
            // Not subscribed to this event type; ack and drop.
            debug!(delivery_id = %delivery_id, event_type = %tag, "Ignoring unknown event type");
            Ok((StatusCode::ACCEPTED, "Accepted (ignored)"))
        }
        Err(err) => {
            // MalformedPayload / SchemaViolation: ack so the sender does not
            // redeliver bytes that can never decode, but log loudly.
            warn!(
                delivery_id = %delivery_id,
                event_type = %envelope.event_type,
                error = %err,
                "Webhook payload failed to decode"
            );
            Ok((StatusCode::ACCEPTED, "Accepted (undecodable)"))
        }
    }
}

/// Extracts a required header value as a string.
fn get_header(headers: &HeaderMap, name: &'static str) -> Result<String, WebhookError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .ok_or(WebhookError::MissingHeader(name))
}
