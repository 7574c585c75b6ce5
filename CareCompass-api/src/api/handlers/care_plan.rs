use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::api::handlers::assessment::{AssessmentApiService, ErrorResponse};
use crate::entities::care_plan::{CarePlanReport, CarePlanResponse};

/// Generate the care plan report for a session.
///
/// One plan per assessed condition; a session with nothing assessed gets an
/// empty report, not an error. The timestamp is produced here at display
/// time, not by the domain layer.
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}/care-plans",
    params(
        ("session_id" = Uuid, Path, description = "Session key owning the results")
    ),
    responses(
        (status = 200, description = "Care plan report for assessed conditions", body = CarePlanReport),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "care_plans"
)]
#[instrument(skip(service))]
pub async fn get_care_plans(
    State(service): State<AssessmentApiService>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, Response> {
    info!("Generating care plan report for session {}", session_id);

    match service.generate_care_plans(session_id).await {
        Ok(plans) => {
            let report = CarePlanReport {
                session_id,
                generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                plans: plans.into_iter().map(CarePlanResponse::from).collect(),
            };
            Ok((StatusCode::OK, Json(report)))
        }
        Err(e) => {
            error!("Failed to generate care plans for {}: {}", session_id, e);
            Err(ErrorResponse::internal_error().into_response())
        }
    }
}
