//! HttpPredictor against a mock predictor service.

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

use sentiment_api::prediction::Prediction;
use sentiment_api::predictor::{HttpPredictor, Predictor, PredictorError};

async fn predictor_for(server: &MockServer) -> HttpPredictor {
    HttpPredictor::new(format!("{}/predict", server.uri()), Duration::from_millis(500)).unwrap()
}

#[tokio::test]
async fn test_sends_text_and_returns_prediction_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "I love this product"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "Positive", "probability": 0.93})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let predictor = predictor_for(&server).await;
    let prediction = predictor.predict("I love this product").await;

    assert_eq!(prediction, Prediction::new("Positive", 0.93));
}

#[tokio::test]
async fn test_probability_is_not_clamped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "Positive", "probability": 1.7})),
        )
        .mount(&server)
        .await;

    let prediction = predictor_for(&server).await.predict("overly confident").await;
    assert_eq!(prediction.probability, 1.7);
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .expect(1)
        .mount(&server)
        .await;

    let predictor = predictor_for(&server).await;
    assert!(matches!(
        predictor.try_predict("some text").await,
        Err(PredictorError::Status(500))
    ));
    // second call goes through the public entry point; no retry is made
    server.reset().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    assert_eq!(predictor.predict("some text").await, Prediction::fallback());
}

#[tokio::test]
async fn test_malformed_and_empty_bodies_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "malformed"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "empty body"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "null body"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "missing fields"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sentiment": "positive"})))
        .mount(&server)
        .await;

    let predictor = predictor_for(&server).await;
    for text in ["malformed", "empty body", "null body", "missing fields"] {
        assert!(
            matches!(
                predictor.try_predict(text).await,
                Err(PredictorError::Decode(_))
            ),
            "expected decode failure for {text}"
        );
        assert_eq!(predictor.predict(text).await, Prediction::fallback());
    }
}

#[tokio::test]
async fn test_empty_and_blank_labels_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "empty label"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "", "probability": 0.4})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"text": "blank label"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "   ", "probability": 0.5})),
        )
        .mount(&server)
        .await;

    let predictor = predictor_for(&server).await;
    for text in ["empty label", "blank label"] {
        assert!(matches!(
            predictor.try_predict(text).await,
            Err(PredictorError::EmptyLabel)
        ));
        assert_eq!(predictor.predict(text).await, Prediction::fallback());
    }
}

#[tokio::test]
async fn test_undefined_answer_from_predictor_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "Undefined", "probability": 0.0})),
        )
        .mount(&server)
        .await;

    let predictor = predictor_for(&server).await;
    let prediction = predictor.try_predict("genuinely unsure").await.unwrap();
    assert!(prediction.is_fallback());
    assert_eq!(predictor.predict("genuinely unsure").await, Prediction::fallback());
}

#[tokio::test]
async fn test_timeout_is_treated_as_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"label": "Positive", "probability": 0.9}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let predictor =
        HttpPredictor::new(format!("{}/predict", server.uri()), Duration::from_millis(100))
            .unwrap();

    assert!(matches!(
        predictor.try_predict("too slow").await,
        Err(PredictorError::Transport(_))
    ));
    assert_eq!(predictor.predict("too slow").await, Prediction::fallback());
}

#[tokio::test]
async fn test_unreachable_predictor_falls_back() {
    // bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let predictor = HttpPredictor::new(
        format!("http://127.0.0.1:{}/predict", port),
        Duration::from_millis(500),
    )
    .unwrap();

    let err = predictor.try_predict("nobody home").await.unwrap_err();
    assert_eq!(err.reason(), "transport");
    assert_eq!(predictor.predict("nobody home").await, Prediction::fallback());
}
