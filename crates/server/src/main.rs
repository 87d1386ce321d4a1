//! intake-server: patient intake extraction service binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intake_core::ModelHandle;
use intake_server::ai::GeminiClient;
use intake_server::config::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Create model client (None if GEMINI_API_KEY not set)
    let model: Option<ModelHandle> = config.gemini_api_key.as_ref().map(|key| {
        Arc::new(GeminiClient::new(
            key.clone(),
            config.model.clone(),
            config.location.clone(),
        )) as ModelHandle
    });

    // Log startup info
    if model.is_some() {
        tracing::info!(model = %config.model, location = %config.location, "Model client configured");
    } else {
        tracing::warn!("GEMINI_API_KEY not set, extraction flow disabled");
    }
    if config.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("API key authentication disabled (no API_KEY env var)");
    }
    tracing::info!("Rate limiting: {} requests/second", config.rate_limit_rps);

    // Build application
    let app = intake_server::build_app(model, &config);

    // Start server
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    tracing::info!("Starting intake server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
