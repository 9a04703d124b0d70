//! # Moderation Proxy Tests
//!
//! End-to-end tests of the `/api/moderate` contract: the happy path, the
//! wrong-method response, and the upstream failure modes, all against a
//! mocked model endpoint.

mod common;

use common::{TestApp, GEMINI_PATH, TEST_API_KEY};
use httpmock::Method;
use serde_json::{json, Value};

fn gemini_envelope(verdict_text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": verdict_text }] }
        }]
    })
}

fn sample_verdict_text() -> String {
    json!({
        "overallScore": 0.55,
        "metrics": [{ "category": "Insult", "score": 0.8 }],
        "reasoning": "Direct personal insult",
        "flaggedPhrases": ["worthless"],
        "recommendation": "FLAG",
        "detectedLanguage": "English"
    })
    .to_string()
}

#[tokio::test]
async fn moderate_relays_the_structured_verdict() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    let model_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path(GEMINI_PATH)
            .query_param("key", TEST_API_KEY)
            .body_contains("systemInstruction")
            .body_contains("responseSchema")
            .body_contains("Content for moderation:");
        then.status(200)
            .json_body(gemini_envelope(&sample_verdict_text()));
    });

    let response = app
        .client
        .post(format!("{}/api/moderate", app.address))
        .json(&json!({ "text": "You are worthless" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["overallScore"], json!(0.55));
    assert_eq!(body["recommendation"], json!("FLAG"));
    assert_eq!(body["flaggedPhrases"], json!(["worthless"]));
    assert_eq!(body["metrics"][0]["category"], json!("Insult"));
    assert_eq!(body["detectedLanguage"], json!("English"));

    model_mock.assert();
}

#[tokio::test]
async fn moderate_strips_the_data_url_prefix_before_forwarding() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    let model_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path(GEMINI_PATH)
            .body_contains("\"data\":\"QUJD\"")
            .body_contains("Examine this image for visual abuse");
        then.status(200)
            .json_body(gemini_envelope(&sample_verdict_text()));
    });

    let response = app
        .client
        .post(format!("{}/api/moderate", app.address))
        .json(&json!({ "image": "data:image/png;base64,QUJD" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    model_mock.assert();
}

#[tokio::test]
async fn get_on_moderate_endpoint_is_method_not_allowed() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    let response = app
        .client
        .get(format!("{}/api/moderate", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 405);
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], json!("Method not allowed"));
}

#[tokio::test]
async fn empty_model_output_is_an_internal_failure() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    app.mock_server.mock(|when, then| {
        when.method(Method::POST).path(GEMINI_PATH);
        then.status(200).json_body(json!({ "candidates": [] }));
    });

    let response = app
        .client
        .post(format!("{}/api/moderate", app.address))
        .json(&json!({ "text": "anything" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(
        body["error"],
        json!("Moderation engine failed to produce a valid response.")
    );
}

#[tokio::test]
async fn unparseable_model_output_is_an_internal_failure() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    app.mock_server.mock(|when, then| {
        when.method(Method::POST).path(GEMINI_PATH);
        then.status(200)
            .json_body(gemini_envelope("this is not a JSON verdict"));
    });

    let response = app
        .client
        .post(format!("{}/api/moderate", app.address))
        .json(&json!({ "text": "anything" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse body");
    let message = body["error"].as_str().expect("error is not a string");
    assert!(message.contains("not a valid analysis result"));
}

#[tokio::test]
async fn upstream_error_surfaces_as_internal_failure_with_message() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    app.mock_server.mock(|when, then| {
        when.method(Method::POST).path(GEMINI_PATH);
        then.status(403).body("API key not valid");
    });

    let response = app
        .client
        .post(format!("{}/api/moderate", app.address))
        .json(&json!({ "text": "anything" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse body");
    let message = body["error"].as_str().expect("error is not a string");
    assert!(message.contains("API key not valid"));
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await.expect("Failed to spawn app");

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}
