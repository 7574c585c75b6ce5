use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::{assessment, care_plan, health};
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub async fn create_app() -> Router {
    debug!("Creating application router");

    // Create assessment service using factory function
    let assessment_service = assessment::create_service();

    // Create health service using factory function
    let health_service = health::create_health_service();

    // Set up API routes; concurrent sessions never share results because
    // every route is keyed by session id
    let api_routes = Router::new()
        .route(
            "/sessions/:session_id/assessments",
            post(assessment::create_assessment).get(assessment::get_session_results),
        )
        .route(
            "/sessions/:session_id/care-plans",
            get(care_plan::get_care_plans),
        )
        .route("/sessions/:session_id", delete(assessment::clear_session));

    debug!("API routes configured");

    // Set up public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    debug!("Public routes configured");

    // Combine all routes
    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(assessment_service);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}
