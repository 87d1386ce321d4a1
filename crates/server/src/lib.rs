//! intake-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod ai;
pub mod config;
mod error;
mod middleware;
mod routes;

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use intake_core::ModelHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ai::extract::ExtractPatientFlow;
use config::Config;
use middleware::ApiKeyAuth;

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(model: Option<ModelHandle>, config: &Config) -> Router {
    // The flow only exists when a model client is configured; the route
    // handler surfaces failed-precondition otherwise.
    let flow: Option<Arc<ExtractPatientFlow>> =
        model.map(|model| Arc::new(ExtractPatientFlow::new(model)));

    // Create auth state
    let auth = ApiKeyAuth::new(config.api_key.clone());

    // Create rate limiter
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_rps);

    // Flow routes (the callable surface)
    let flow_routes = Router::new()
        .nest("/flows", routes::flow_routes())
        .layer(axum_mw::from_fn(middleware::auth::auth_middleware))
        .layer(Extension(auth))
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter));

    // Public routes (no auth required)
    let mut public_routes = Router::new().route("/health", get(routes::health::check));

    if config.metrics_enabled {
        // Install the Prometheus recorder via build_recorder() +
        // set_global_recorder() so repeated calls (integration tests
        // build the app many times) are ignored instead of panicking,
        // while the handle for /metrics stays valid.
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let prometheus_handle = recorder.handle();
        let _ = metrics::set_global_recorder(recorder);

        public_routes = public_routes
            .route("/metrics", get(routes::metrics::get))
            .layer(Extension(prometheus_handle));
    }

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    let mut app = Router::new()
        .merge(public_routes)
        .merge(flow_routes)
        .layer(Extension(flow))
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    if config.metrics_enabled {
        app = app.layer(axum_mw::from_fn(middleware::metrics_middleware));
    }

    app
}
