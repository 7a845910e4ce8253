use axum::{http::StatusCode, routing::get, Router};

/// Liveness probe, no database round trip
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}
