use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use medspace_core_lead_contracts::{LeadService, LeadSubmitError};

use super::{error, internal_server_error, validation_error};
use crate::models::{lead::ApiLeadRequest, ApiSubmitResponse};

pub fn router(service: Arc<impl LeadService>) -> Router<()> {
    Router::new()
        .route("/api/submit", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl LeadService>>,
    Json(request): Json<ApiLeadRequest>,
) -> Response {
    let submission = match request.validate() {
        Ok(submission) => submission,
        Err(details) => return validation_error(details),
    };

    match service.submit(submission).await {
        Ok(()) => Json(ApiSubmitResponse {
            success: true,
            message: "Form submitted successfully",
        })
        .into_response(),
        Err(LeadSubmitError::NotConfigured) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error")
        }
        Err(LeadSubmitError::Append(err)) => {
            tracing::error!("Failed to append lead submission: {err:#}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to submit form. Please try again.",
            )
        }
        Err(LeadSubmitError::Other(err)) => internal_server_error(err),
    }
}
