use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodiak_events::config::Config;
use kodiak_events::dispatch::TracingSink;
use kodiak_events::registry::SchemaRegistry;
use kodiak_events::server::{AppState, build_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kodiak_events=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "configuration error");
        std::process::exit(1);
    });

    // Registered once here; immutable for the process lifetime.
    let registry = SchemaRegistry::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "schema registration error");
        std::process::exit(1);
    });

    let app_state = AppState::new(registry, config.webhook_secret, Arc::new(TracingSink));
    let app = build_router(app_state);

    tracing::info!("listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
