use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Assessment endpoints
        crate::api::handlers::assessment::create_assessment,
        crate::api::handlers::assessment::get_session_results,
        crate::api::handlers::assessment::clear_session,

        // Care plan endpoints
        crate::api::handlers::care_plan::get_care_plans,
    ),
    components(
        schemas(
            // Domain entities
            care_compass_domain::entities::Condition,
            care_compass_domain::entities::RiskTier,

            // Assessment entities
            crate::entities::assessment::CreateAssessmentRequest,
            crate::entities::assessment::CardiovascularFields,
            crate::entities::assessment::DiabetesFields,
            crate::entities::assessment::CopdFields,
            crate::entities::assessment::AsthmaFields,
            crate::entities::assessment::AssessmentResponse,
            crate::entities::assessment::AssessmentSummary,
            crate::entities::assessment::SessionResultsResponse,

            // Care plan entities
            crate::entities::care_plan::CarePlanResponse,
            crate::entities::care_plan::CarePlanReport,

            // Handler schemas
            crate::api::handlers::assessment::ErrorResponse,
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "assessments", description = "Condition risk assessment endpoints"),
        (name = "care_plans", description = "Care plan generation endpoints")
    ),
    info(
        title = "CareCompass API",
        version = "0.1.0",
        description = "Chronic condition risk stratification and personalized care planning",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "CareCompass API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().unwrap();
        assert!(tags.iter().any(|tag| tag.name == "assessments"));
        assert!(tags.iter().any(|tag| tag.name == "care_plans"));

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/sessions/{session_id}/assessments"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/sessions/{session_id}/care-plans"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/sessions/{session_id}"));
    }
}
