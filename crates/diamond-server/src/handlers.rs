//! Request handlers.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use diamond_core::{calculate, CalculationRequest, DiamondError};

/// Welcome response for the API root.
#[derive(Serialize)]
pub struct WelcomeResponse {
    message: String,
}

/// API root handler.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Diamond Calculator API!".to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Error response. The field is named `detail` for wire compatibility
/// with existing clients of the calculator API.
#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            detail: message.into(),
        }
    }
}

/// Price a batch of diamond groups.
///
/// Returns the per-group and grand totals on success. An invalid grade in
/// any group fails the whole batch with 400 naming the offending value;
/// any other failure maps to 500.
pub async fn calculate_prices(Json(request): Json<CalculationRequest>) -> impl IntoResponse {
    match calculate(&request.groups) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => (status_for(&e), Json(ErrorResponse::new(e.to_string()))).into_response(),
    }
}

/// Map a pricing error to its HTTP status.
fn status_for(error: &DiamondError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
