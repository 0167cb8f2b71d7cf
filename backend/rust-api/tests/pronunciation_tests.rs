mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_cors_headers, create_test_app, post_json, read_json};

const SCORE_PATH: &str = "/api/v1/pronunciation/score";

#[tokio::test]
async fn test_score_exact_match() {
    let app = create_test_app("http://127.0.0.1:9", None);

    let response = post_json(
        &app,
        SCORE_PATH,
        json!({ "target": "¡Buenos días!", "transcript": "buenos días" }),
    )
    .await;
    assert_cors_headers(&response);

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 100);
    assert_eq!(body["verdict"], "excellent");
    assert_eq!(body["feedback"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_score_partial_match_reports_feedback() {
    let app = create_test_app("http://127.0.0.1:9", None);

    let (status, body) = read_json(
        post_json(
            &app,
            SCORE_PATH,
            json!({ "target": "Quiero un café por favor", "transcript": "quiero uno café" }),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 40);
    assert_eq!(body["matchedWords"], 2);
    assert_eq!(body["totalWords"], 5);
    assert_eq!(body["verdict"], "keepPracticing");

    let feedback = body["feedback"].as_array().unwrap();
    assert_eq!(feedback.len(), 3);
    assert_eq!(feedback[0], "\"uno\" should be \"un\"");
    assert_eq!(feedback[1], "Missing word: \"por\"");
}

#[tokio::test]
async fn test_score_rejects_empty_target() {
    let app = create_test_app("http://127.0.0.1:9", None);

    let (status, body) = read_json(
        post_json(&app, SCORE_PATH, json!({ "target": "", "transcript": "hola" })).await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusHint"], "validationError");

    let (status, _) = read_json(
        post_json(&app, SCORE_PATH, json!({ "target": "¿?", "transcript": "hola" })).await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
