//! HTTP server for webhook ingestion.
//!
//! # Endpoints
//!
//! - `POST /webhook` - accepts webhook deliveries (202 Accepted)
//! - `GET /health` - liveness probe (200)

use std::sync::Arc;

use crate::dispatch::EventSink;
use crate::registry::SchemaRegistry;

pub mod health;
pub mod webhook;

pub use health::health_handler;
pub use webhook::webhook_handler;

/// Shared application state, passed to handlers via axum's `State` extractor.
///
/// The registry is populated once at startup and treated as immutable for the
/// process lifetime; handlers only read it, so concurrent requests need no
/// locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Event-type tag -> schema lookup, read-only after startup.
    registry: SchemaRegistry,

    /// Shared secret for HMAC-SHA256 signature verification.
    webhook_secret: Vec<u8>,

    /// Downstream consumer of decoded events.
    sink: Arc<dyn EventSink>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(
        registry: SchemaRegistry,
        webhook_secret: impl Into<Vec<u8>>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                registry,
                webhook_secret: webhook_secret.into(),
                sink,
            }),
        }
    }

    /// Returns the schema registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.inner.registry
    }

    /// Returns the webhook secret.
    pub fn webhook_secret(&self) -> &[u8] {
        &self.inner.webhook_secret
    }

    /// Returns the event sink.
    pub fn sink(&self) -> &dyn EventSink {
        self.inner.sink.as_ref()
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/webhook", post(webhook_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
}
