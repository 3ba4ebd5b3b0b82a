use crate::api::response::{Failure, Success};
use crate::text::StatisticsReport;
use crate::{PrepError, Preprocessor, ProcessedText};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type ApiResult<T> = Result<Json<Success<T>>, PrepError>;

#[derive(Debug, Deserialize)]
struct CleanRequest {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzePayload {
    statistics: StatisticsReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct Health {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

pub(crate) async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub(crate) async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        message: "Text preprocessing service is running",
        timestamp: Utc::now(),
    })
}

/// `POST /api/clean` with `{"url": "..."}`
pub(crate) async fn clean(
    State(preprocessor): State<Arc<Preprocessor>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<ProcessedText> {
    let request: CleanRequest = parse_body(&read_body(body)?)?;
    let url = request
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or(PrepError::MissingField("url"))?;

    tracing::info!("Cleaning text from {}", url.trim());
    let processed = preprocessor.process_url(&url).await?;

    Ok(Json(Success::new(processed)))
}

/// `POST /api/analyze` with `{"text": "..."}`
pub(crate) async fn analyze(
    State(preprocessor): State<Arc<Preprocessor>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<AnalyzePayload> {
    let request: AnalyzeRequest = parse_body(&read_body(body)?)?;
    let text = request.text.ok_or(PrepError::MissingField("text"))?;

    tracing::info!("Analyzing {} characters of posted text", text.chars().count());
    let statistics = preprocessor.analyze(&text);

    Ok(Json(Success::new(AnalyzePayload { statistics })))
}

pub(crate) async fn not_found() -> (StatusCode, Json<Failure>) {
    (StatusCode::NOT_FOUND, Json(Failure::new("Endpoint not found")))
}

pub(crate) async fn method_not_allowed() -> (StatusCode, Json<Failure>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Failure::new("Method not allowed")),
    )
}

/// Turns a body extraction failure into an error that renders as an envelope
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, PrepError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            PrepError::PayloadTooLarge(rejection.body_text())
        } else {
            PrepError::InvalidPayload(rejection.body_text())
        }
    })
}

/// Parses a JSON body regardless of its Content-Type header
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, PrepError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(PrepError::InvalidPayload(
            "no JSON payload provided".to_string(),
        ));
    }

    serde_json::from_slice(body).map_err(|e| PrepError::InvalidPayload(e.to_string()))
}
