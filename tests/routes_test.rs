// ABOUTME: HTTP route tests for the coaching API using in-process Axum requests
// ABOUTME: Covers banner, health, predict, coach chat, error bodies, and CORS preflight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use axum::Router;
use common::{Scripted, ScriptedProvider};
use helpers::axum_test::AxumTestRequest;
use para_coach::config::CorsConfig;
use para_coach::errors::ErrorCode;
use para_coach::routes::build_router;
use serde_json::{json, Value};

fn app(provider: Arc<ScriptedProvider>) -> Router {
    build_router(common::service_with(provider), &CorsConfig::default())
}

fn documented_athlete() -> Value {
    serde_json::to_value(common::wheelchair_racer_raw()).unwrap()
}

async fn predicted(app: Router) -> Value {
    let response = AxumTestRequest::post("/predict")
        .json(&documented_athlete())
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    response.json()
}

// ============================================================================
// Banner and health
// ============================================================================

#[tokio::test]
async fn test_root_lists_endpoints() {
    let response = AxumTestRequest::get("/")
        .send(app(ScriptedProvider::always_valid()))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["message"], "Para-athlete coaching API is running.");
    assert_eq!(body["endpoints"], json!(["/predict", "/coach/chat", "/health"]));
}

#[tokio::test]
async fn test_health_reports_ok() {
    let response = AxumTestRequest::get("/health")
        .send(app(ScriptedProvider::always_valid()))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

// ============================================================================
// Predict
// ============================================================================

#[tokio::test]
async fn test_predict_returns_profile_and_predictions() {
    let body = predicted(app(ScriptedProvider::always_valid())).await;

    assert_eq!(body["input"]["sport_type"], "Wheelchair Racing");
    assert_eq!(body["input"]["disability_type"], "Spinal Cord Injury");
    assert_eq!(body["input"]["training_days_per_week"], 6);

    let stamina = body["predictions"]["stamina_level"].as_f64().unwrap();
    let risk = body["predictions"]["injury_risk_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&stamina));
    assert!((0.0..=1.0).contains(&risk));
    let label = body["predictions"]["injury_risk_label"].as_str().unwrap();
    assert!(["Low", "Medium", "High"].contains(&label));
}

#[tokio::test]
async fn test_predict_out_of_range_names_the_field() {
    let mut athlete = documented_athlete();
    athlete["heart_rate_rest"] = json!(150);

    let response = AxumTestRequest::post("/predict")
        .json(&athlete)
        .send(app(ScriptedProvider::always_valid()))
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["kind"], "validation");
    assert_eq!(body["error"]["retryable"], false);
    assert_eq!(body["error"]["details"]["field"], "heart_rate_rest");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("heart_rate_rest"));
}

#[tokio::test]
async fn test_predict_missing_field_is_reported() {
    let mut athlete = documented_athlete();
    athlete.as_object_mut().unwrap().remove("age");

    let response = AxumTestRequest::post("/predict")
        .json(&athlete)
        .send(app(ScriptedProvider::always_valid()))
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["field"], "age");
}

#[tokio::test]
async fn test_malformed_json_is_invalid_input() {
    let response = AxumTestRequest::post("/predict")
        .raw_json("{\"age\": ")
        .send(app(ScriptedProvider::always_valid()))
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// Coach chat
// ============================================================================

#[tokio::test]
async fn test_coach_chat_without_athlete_is_context_error() {
    let response = AxumTestRequest::post("/coach/chat")
        .json(&json!({ "user_question": "What diet should I follow?" }))
        .send(app(ScriptedProvider::always_valid()))
        .await;
    assert_eq!(response.status(), 422);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONTEXT_MISSING");
    assert_eq!(body["error"]["kind"], "context");
    assert_eq!(body["error"]["details"]["missing"], "athlete_data");
}

#[tokio::test]
async fn test_coach_chat_answers_and_extends_history() {
    let provider = ScriptedProvider::new([Scripted::Reply(common::valid_reply_text("diet"))]);
    let router = app(provider.clone());
    let outcome = predicted(router.clone()).await;

    let response = AxumTestRequest::post("/coach/chat")
        .json(&json!({
            "athlete_data": outcome["input"],
            "predictions": outcome["predictions"],
            "conversation_history": [],
            "user_question": "What diet should I follow?"
        }))
        .send(router)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["question"], "What diet should I follow?");
    assert_eq!(body["response"]["sections"].as_array().unwrap().len(), 4);
    assert_eq!(body["conversation_history"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["conversation_history"][0]["question"],
        "What diet should I follow?"
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_coach_chat_timeout_maps_to_gateway_timeout() {
    common::init_test_logging();
    let provider = ScriptedProvider::new([
        Scripted::Fail(ErrorCode::ExternalTimeout, "deadline".to_owned()),
        Scripted::Fail(ErrorCode::ExternalTimeout, "deadline".to_owned()),
    ]);
    let router = app(provider.clone());
    let outcome = predicted(router.clone()).await;

    let response = AxumTestRequest::post("/coach/chat")
        .json(&json!({
            "athlete_data": outcome["input"],
            "predictions": outcome["predictions"],
            "user_question": "Diet?"
        }))
        .send(router)
        .await;
    assert_eq!(response.status(), 504);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EXTERNAL_TIMEOUT");
    assert_eq!(body["error"]["kind"], "generation");
    assert_eq!(body["error"]["retryable"], true);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_coach_chat_malformed_replies_map_to_bad_gateway() {
    let provider = ScriptedProvider::new([
        Scripted::Reply("Just eat more.".to_owned()),
        Scripted::Reply("Still no sections.".to_owned()),
    ]);
    let router = app(provider);
    let outcome = predicted(router.clone()).await;

    let response = AxumTestRequest::post("/coach/chat")
        .json(&json!({
            "athlete_data": outcome["input"],
            "predictions": outcome["predictions"],
        }))
        .send(router)
        .await;
    assert_eq!(response.status(), 502);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
    assert_eq!(body["error"]["details"]["cause"], "malformed_reply");
    assert_eq!(body["error"]["retryable"], true);
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_preflight_allows_form_origin() {
    let response = AxumTestRequest::options("/predict")
        .header("origin", "https://forms.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(app(ScriptedProvider::always_valid()))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
