use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use medspace_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    sheets_credentials: bool,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { sheets_credentials } = service.get_status().await;

    let status = if sheets_credentials {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        sheets_credentials,
    };

    (status, Json(response)).into_response()
}
