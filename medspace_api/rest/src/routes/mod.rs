use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiFieldError};

pub mod health;
pub mod lead;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred",
    )
}

pub fn error(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiError {
            error: message,
            details: None,
        }),
    )
        .into_response()
}

fn validation_error(details: Vec<ApiFieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: "Validation failed",
            details: Some(details),
        }),
    )
        .into_response()
}
