//! HTTP request handlers for the validation service.
//!
//! Implements the info, health check and document validation endpoints using axum.

use crate::pipeline::{PipelineError, ValidationPipeline, ValidationResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "hullcheck";

/// Path of the validation endpoint
pub const VALIDATE_PATH: &str = "/api/v1/validate";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extraction and validation pipeline
    pub pipeline: Arc<ValidationPipeline>,
    /// Name reported by the root endpoint
    pub app_name: String,
    /// Version reported by the root and health endpoints
    pub app_version: String,
}

/// Document validation request
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// Raw document text; may be empty
    pub document_text: String,
}

/// Root endpoint listing
#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    /// Health check path
    pub health: String,
    /// Validation path
    pub validate: String,
}

/// Root info response
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Always "active"
    pub status: String,
    /// Available endpoints
    pub endpoints: Endpoints,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Service name
    pub service: String,
    /// Application version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The document could not be validated
    Pipeline(PipelineError),
    /// Request body missing or malformed
    InvalidRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Pipeline(PipelineError::Extraction(e)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("AI service failed: {}", e),
            ),
            AppError::Pipeline(PipelineError::Schema(e)) => {
                (StatusCode::BAD_REQUEST, format!("Invalid data: {}", e))
            }
            AppError::Pipeline(PipelineError::Validator(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Validation error: {}", e),
            ),
            AppError::InvalidRequest(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(ErrorResponse { detail });
        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        warn!("Rejected request body: {}", e.body_text());
        AppError::InvalidRequest(e.body_text())
    }
}

/// GET / - Service info
async fn root(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: state.app_name.clone(),
        version: state.app_version.clone(),
        status: "active".to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            validate: VALIDATE_PATH.to_string(),
        },
    })
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: state.app_version.clone(),
    })
}

/// POST /api/v1/validate - Extract and validate one document
async fn validate_document(
    State(state): State<AppState>,
    request: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(request) = request?;
    let response = state.pipeline.run(&request.document_text).await?;
    Ok(Json(response))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route(VALIDATE_PATH, post(validate_document))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
