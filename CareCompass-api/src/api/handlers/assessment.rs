use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::ValidationErrors;

// Import domain entities and services
use care_compass_domain::services::{
    create_default_assessment_service, AssessmentServiceError, AssessmentServiceTrait,
};

// Import our entities
use crate::entities::assessment::{
    AssessmentResponse, AssessmentSummary, CreateAssessmentRequest, SessionResultsResponse,
};

/// Error response format for API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("The requested {} could not be found", resource),
            details: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Service type for dependency injection
pub type AssessmentApiService = Arc<dyn AssessmentServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> AssessmentApiService {
    Arc::new(create_default_assessment_service())
}

/// Flatten validator field errors into a single message
fn flatten_validation_errors(validation_errors: &ValidationErrors) -> String {
    validation_errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors
                .iter()
                .map(|err| {
                    if let Some(msg) = &err.message {
                        msg.to_string()
                    } else {
                        format!("Invalid {}", field)
                    }
                })
                .collect();
            format!("{}: {}", field, error_msgs.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}

/// Map service errors to API error responses
fn map_service_error(err: AssessmentServiceError) -> Response {
    match err {
        AssessmentServiceError::ValidationError(msg) => {
            ErrorResponse::bad_request(&msg).into_response()
        }
        AssessmentServiceError::SessionNotFound(_) => {
            ErrorResponse::not_found("session").into_response()
        }
        other => {
            error!("Assessment service error: {}", other);
            ErrorResponse::internal_error().into_response()
        }
    }
}

/// Assess one condition for a session
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{session_id}/assessments",
    params(
        ("session_id" = Uuid, Path, description = "Session key owning the results")
    ),
    request_body = CreateAssessmentRequest,
    responses(
        (status = 201, description = "Condition assessed", body = AssessmentResponse),
        (status = 400, description = "Input fields out of range", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "assessments"
)]
#[instrument(skip(service, payload))]
pub async fn create_assessment(
    State(service): State<AssessmentApiService>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<CreateAssessmentRequest>,
) -> Result<impl IntoResponse, Response> {
    if let Err(validation_errors) = payload.validate_fields() {
        let message = flatten_validation_errors(&validation_errors);
        info!("Rejected assessment for session {}: {}", session_id, message);
        return Err(ErrorResponse::validation_error(&message, None).into_response());
    }

    let input = payload.into_domain();
    info!(
        "Assessing {} for session {}",
        input.condition(),
        session_id
    );

    match service.assess(session_id, input).await {
        Ok(assessment) => Ok((
            StatusCode::CREATED,
            Json(AssessmentResponse::from(assessment)),
        )),
        Err(e) => Err(map_service_error(e)),
    }
}

/// Get a session's current assessment results
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}/assessments",
    params(
        ("session_id" = Uuid, Path, description = "Session key owning the results")
    ),
    responses(
        (status = 200, description = "Current condition-to-tier mapping", body = SessionResultsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "assessments"
)]
#[instrument(skip(service))]
pub async fn get_session_results(
    State(service): State<AssessmentApiService>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching assessment results for session {}", session_id);

    match service.get_results(session_id).await {
        Ok(results) => {
            let summaries: Vec<AssessmentSummary> = results
                .iter()
                .map(|(condition, tier)| AssessmentSummary {
                    condition,
                    risk_tier: tier,
                })
                .collect();
            Ok((
                StatusCode::OK,
                Json(SessionResultsResponse {
                    session_id,
                    assessed: summaries.len(),
                    results: summaries,
                }),
            ))
        }
        Err(e) => Err(map_service_error(e)),
    }
}

/// Discard a session's assessment results
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{session_id}",
    params(
        ("session_id" = Uuid, Path, description = "Session key to clear")
    ),
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "assessments"
)]
#[instrument(skip(service))]
pub async fn clear_session(
    State(service): State<AssessmentApiService>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, Response> {
    info!("Clearing session {}", session_id);

    match service.clear_session(session_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(map_service_error(e)),
    }
}
