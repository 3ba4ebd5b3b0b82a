//! Integration tests for the HTTP API
//!
//! Each test starts the real router on an ephemeral port and talks to it
//! with reqwest. wiremock serves the books that `/api/clean` fetches.

use gutenprep::api::{router, router_with_body_limit};
use gutenprep::{Config, Preprocessor};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOOK: &str = "\
The Project Gutenberg eBook of Test Book

This eBook is for the use of anyone anywhere in the United States.

*** START OF THE PROJECT GUTENBERG EBOOK TEST BOOK ***

CHAPTER I.

Hello world.   Hello again!
[Illustration: Two friends]
How are you? I am fine.

*** END OF THE PROJECT GUTENBERG EBOOK TEST BOOK ***

Section 1. General Terms of Use.
";

/// Starts the API on an ephemeral port and returns its base URL
async fn spawn_app() -> String {
    let preprocessor = Preprocessor::new(&Config::default()).expect("Failed to build preprocessor");
    serve_router(router(Arc::new(preprocessor))).await
}

/// Starts the API with a custom request body limit
async fn spawn_app_with_body_limit(max_body_bytes: usize) -> String {
    let preprocessor = Preprocessor::new(&Config::default()).expect("Failed to build preprocessor");
    serve_router(router_with_body_limit(Arc::new(preprocessor), max_body_bytes)).await
}

async fn serve_router(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

async fn post_json(url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("Request failed");
    let status = response.status().as_u16();
    let json = response.json().await.expect("Response was not JSON");
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_index_page() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("<form"));
    assert!(html.contains("/api/clean"));
    assert!(html.contains("/api/analyze"));
}

#[tokio::test]
async fn test_analyze_text() {
    let base = spawn_app().await;

    let (status, body) = post_json(
        &format!("{}/api/analyze", base),
        json!({"text": "Hello world. Hello again!"}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let stats = &body["statistics"];
    assert_eq!(stats["total_characters"], 25);
    assert_eq!(stats["total_words"], 4);
    assert_eq!(stats["total_sentences"], 2);
    assert_eq!(stats["avg_sentence_length"], 2.0);
    assert_eq!(stats["most_common_words"][0], "hello");
    assert!(body.get("summary").is_none());
}

#[tokio::test]
async fn test_analyze_empty_text() {
    let base = spawn_app().await;

    let (status, body) = post_json(&format!("{}/api/analyze", base), json!({"text": ""})).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["statistics"]["total_words"], 0);
    assert_eq!(body["statistics"]["total_sentences"], 0);
    assert_eq!(body["statistics"]["avg_word_length"], 0.0);
    assert_eq!(body["statistics"]["most_common_words"], json!([]));
}

#[tokio::test]
async fn test_analyze_missing_text() {
    let base = spawn_app().await;

    let (status, body) =
        post_json(&format!("{}/api/analyze", base), json!({"url": "x.txt"})).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("'text'"));
}

#[tokio::test]
async fn test_analyze_without_body() {
    let base = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_clean_book() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/42/42-0.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BOOK))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = spawn_app().await;
    let (status, body) = post_json(
        &format!("{}/api/clean", base),
        json!({"url": format!("{}/files/42/42-0.txt", mock_server.uri())}),
    )
    .await;

    assert_eq!(status, 200, "body: {}", body);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["cleaned_text"],
        "CHAPTER I.\n\nHello world. Hello again!\n\nHow are you? I am fine."
    );
    assert_eq!(body["summary"], "CHAPTER I. Hello world. Hello again!");

    let stats = &body["statistics"];
    assert_eq!(stats["total_sentences"], 5);
    assert_eq!(stats["total_words"], 12);
    // "i" and "hello" both occur twice; the roman numeral is seen first
    assert_eq!(stats["most_common_words"][0], "i");
    assert_eq!(stats["most_common_words"][1], "hello");
}

#[tokio::test]
async fn test_clean_rejects_non_txt_url() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(BOOK))
        .expect(0)
        .mount(&mock_server)
        .await;

    let base = spawn_app().await;
    let (status, body) = post_json(
        &format!("{}/api/clean", base),
        json!({"url": format!("{}/book", mock_server.uri())}),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains(".txt"));
}

#[tokio::test]
async fn test_clean_missing_url() {
    let base = spawn_app().await;

    for payload in [json!({}), json!({"url": ""}), json!({"url": null})] {
        let (status, body) = post_json(&format!("{}/api/clean", base), payload).await;
        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("'url'"));
    }
}

#[tokio::test]
async fn test_clean_upstream_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let base = spawn_app().await;
    let (status, body) = post_json(
        &format!("{}/api/clean", base),
        json!({"url": format!("{}/gone.txt", mock_server.uri())}),
    )
    .await;

    assert_eq!(status, 502);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_clean_undecodable_book() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latin1.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xC9, b't', b'e']))
        .mount(&mock_server)
        .await;

    let base = spawn_app().await;
    let (status, body) = post_json(
        &format!("{}/api/clean", base),
        json!({"url": format!("{}/latin1.txt", mock_server.uri())}),
    )
    .await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("UTF-8"));
}

#[tokio::test]
async fn test_unknown_route() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/api/unknown", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
}

#[tokio::test]
async fn test_analyze_text_larger_than_two_megabytes() {
    let base = spawn_app().await;
    let text = "It was a dark and stormy night. ".repeat(100_000);
    assert!(text.len() > 3 * 1024 * 1024);

    let (status, body) = post_json(&format!("{}/api/analyze", base), json!({"text": text})).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["statistics"]["total_sentences"], 100_000);
    assert_eq!(body["statistics"]["total_words"], 700_000);
    assert_eq!(body["statistics"]["avg_sentence_length"], 7.0);
}

#[tokio::test]
async fn test_body_over_limit_uses_envelope() {
    let base = spawn_app_with_body_limit(1024).await;
    let text = "word ".repeat(1_000);

    for endpoint in ["analyze", "clean"] {
        let response = reqwest::Client::new()
            .post(format!("{}/api/{}", base, endpoint))
            .json(&json!({"text": text, "url": text}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 413);

        let body: Value = response.json().await.expect("Response was not JSON");
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("too large"));
    }
}

#[tokio::test]
async fn test_wrong_method_uses_envelope() {
    let base = spawn_app().await;

    for (method, route) in [
        (reqwest::Method::GET, "/api/clean"),
        (reqwest::Method::GET, "/api/analyze"),
        (reqwest::Method::POST, "/health"),
        (reqwest::Method::DELETE, "/"),
    ] {
        let response = reqwest::Client::new()
            .request(method, format!("{}{}", base, route))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 405, "{}", route);

        let body: Value = response.json().await.expect("Response was not JSON");
        assert_eq!(body, json!({"success": false, "error": "Method not allowed"}));
    }
}
