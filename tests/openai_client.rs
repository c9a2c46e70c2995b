//! Provider-call tests: exercise the OpenAI client against a local mock
//! server, covering the happy path, the no-content sentinel, and error bodies.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use probgen_backend::openai::{OpenAI, NO_RESPONSE_TEXT};

fn client_for(server: &mockito::ServerGuard) -> OpenAI {
    OpenAI {
        client: reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap(),
        api_key: "test-key".into(),
        base_url: server.url(),
        model: "gpt-3.5-turbo".into(),
    }
}

#[tokio::test]
async fn sends_one_user_message_and_returns_content_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "Give me a problem"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"  reply with spaces  "}}],"usage":{"prompt_tokens":10,"completion_tokens":20,"total_tokens":30}}"#,
        )
        .create_async()
        .await;

    let oa = client_for(&server);
    let text = oa.generate_problem("Give me a problem").await.unwrap();
    // Verbatim: no trimming, no post-processing.
    assert_eq!(text, "  reply with spaces  ");
    m.assert_async().await;
}

#[tokio::test]
async fn null_content_becomes_the_no_response_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
        .create_async()
        .await;

    let oa = client_for(&server);
    assert_eq!(oa.generate_problem("p").await.unwrap(), NO_RESPONSE_TEXT);
}

#[tokio::test]
async fn empty_choices_become_the_no_response_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let oa = client_for(&server);
    assert_eq!(oa.generate_problem("p").await.unwrap(), NO_RESPONSE_TEXT);
}

#[tokio::test]
async fn provider_error_status_is_surfaced_with_its_message() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let oa = client_for(&server);
    let err = oa.generate_problem("p").await.unwrap_err();
    assert!(err.starts_with("OpenAI HTTP 401"), "got: {}", err);
    assert!(err.contains("Incorrect API key provided"), "got: {}", err);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(502)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let oa = client_for(&server);
    let err = oa.generate_problem("p").await.unwrap_err();
    assert!(err.starts_with("OpenAI HTTP 502"), "got: {}", err);
    assert!(err.contains("upstream exploded"), "got: {}", err);
}
