pub mod extract;
pub mod health;
pub mod metrics;

use axum::{Router, routing::post};

/// Build flow routes
pub fn flow_routes() -> Router {
    Router::new().route("/extractPatientInfo", post(extract::run))
}
