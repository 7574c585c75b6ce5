use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use care_compass_api::api::routes::create_app;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_assessment(session_id: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/v1/sessions/{}/assessments", session_id))
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: String) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

async fn app() -> Router {
    create_app().await
}

const SESSION: &str = "7f8b2c94-38a1-4a9e-9d6a-0f6f3f1c2ab3";

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .await
        .oneshot(get("/health".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["session_store"]["status"], "ok");
}

#[tokio::test]
async fn test_assess_cardiovascular_high_risk() {
    let payload = json!({
        "condition": "cardiovascular",
        "age": 60,
        "systolic_bp": 180,
        "smoker": true,
        "cholesterol": 250
    });

    let response = app()
        .await
        .oneshot(post_assessment(SESSION, &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["condition"], "Cardiovascular");
    assert_eq!(body["risk_tier"], "High");
    assert!((body["score"].as_f64().unwrap() - 30.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_assess_rejects_out_of_range_age() {
    let payload = json!({
        "condition": "cardiovascular",
        "age": 150,
        "systolic_bp": 120,
        "smoker": false,
        "cholesterol": 180
    });

    let response = app()
        .await
        .oneshot(post_assessment(SESSION, &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("Age"));
}

#[tokio::test]
async fn test_assess_rejects_unknown_condition() {
    let payload = json!({
        "condition": "hypertension",
        "age": 50
    });

    let response = app()
        .await
        .oneshot(post_assessment(SESSION, &payload))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_results_and_care_plans_for_assessed_conditions() {
    let app = app().await;

    let cardio = json!({
        "condition": "cardiovascular",
        "age": 60,
        "systolic_bp": 180,
        "smoker": true,
        "cholesterol": 250
    });
    let copd = json!({
        "condition": "copd",
        "smoking_years": 0,
        "age": 30,
        "fev1_percent": 80
    });

    for payload in [&cardio, &copd] {
        let response = app
            .clone()
            .oneshot(post_assessment(SESSION, payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Results summary covers both assessed conditions
    let response = app
        .clone()
        .oneshot(get(format!("/api/v1/sessions/{}/assessments", SESSION)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["assessed"], 2);

    // Care plan report has one plan per assessed condition
    let response = app
        .clone()
        .oneshot(get(format!("/api/v1/sessions/{}/care-plans", SESSION)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 2);

    let cardio_plan = plans
        .iter()
        .find(|plan| plan["condition"] == "Cardiovascular")
        .unwrap();
    assert_eq!(cardio_plan["risk_tier"], "High");
    let monitoring = cardio_plan["monitoring"].as_array().unwrap();
    assert!(monitoring
        .iter()
        .any(|line| line.as_str().unwrap().contains("Monthly")));
    let outcome = cardio_plan["outcome_evaluation"].as_array().unwrap();
    assert!(outcome
        .iter()
        .any(|line| line.as_str().unwrap().contains("Quarterly")));

    let copd_plan = plans
        .iter()
        .find(|plan| plan["condition"] == "COPD")
        .unwrap();
    assert_eq!(copd_plan["risk_tier"], "Low");

    // generated_at is formatted YYYY-MM-DD HH:MM:SS
    let generated_at = body["generated_at"].as_str().unwrap();
    assert_eq!(generated_at.len(), 19);
    assert_eq!(&generated_at[4..5], "-");
    assert_eq!(&generated_at[10..11], " ");
}

#[tokio::test]
async fn test_empty_session_yields_empty_report() {
    let response = app()
        .await
        .oneshot(get(format!("/api/v1/sessions/{}/care-plans", SESSION)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["plans"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sessions_do_not_share_results() {
    let app = app().await;
    let other_session = "11f3f5dc-9f1e-4a41-88a3-0a9f6a2b4c17";

    let payload = json!({
        "condition": "asthma",
        "symptom_days": 3,
        "nighttime_days": 1,
        "inhaler_days": 2,
        "fev1_percent": 80
    });
    let response = app
        .clone()
        .oneshot(post_assessment(SESSION, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get(format!(
            "/api/v1/sessions/{}/assessments",
            other_session
        )))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["assessed"], 0);
}

#[tokio::test]
async fn test_clear_session() {
    let app = app().await;

    let payload = json!({
        "condition": "diabetes",
        "bmi": 35.0,
        "age": 55,
        "family_history": true,
        "fasting_glucose": 180
    });
    let response = app
        .clone()
        .oneshot(post_assessment(SESSION, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/sessions/{}", SESSION))
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(format!("/api/v1/sessions/{}/assessments", SESSION)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["assessed"], 0);
}
