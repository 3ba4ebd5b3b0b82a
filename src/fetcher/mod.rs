//! HTTP fetcher for plain-text books
//!
//! This module handles all outbound HTTP for the service:
//! - Building the HTTP client with user agent and timeout
//! - Validating that a URL names a `.txt` file before any request
//! - A single GET per call, no retries
//! - Error classification (timeout, transport, status, encoding)

mod validate;

pub use validate::validate_text_url;

use crate::config::FetchConfig;
use crate::PrepError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with the configured user agent and timeout
///
/// # Example
///
/// ```no_run
/// use gutenprep::config::FetchConfig;
/// use gutenprep::fetcher::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_secs);

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a `.txt` URL and returns its body as a string
///
/// # Request Flow
///
/// 1. Validate the URL shape; reject without any network activity
/// 2. Send one GET request
/// 3. Map the outcome:
///
/// | Condition | Error |
/// |-----------|-------|
/// | URL not `.txt` / not http(s) | `InvalidUrl` |
/// | Timeout (connect or body) | `Timeout` |
/// | Connection or other transport failure | `Http` |
/// | Non-2xx status | `Status` |
/// | Body is not UTF-8 | `Decode` |
///
/// A leading UTF-8 byte order mark is dropped; the text is otherwise
/// returned unmodified.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, PrepError> {
    let parsed = validate_text_url(url)?;
    let url = parsed.to_string();

    tracing::debug!("Fetching {}", url);

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| classify_error(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} returned HTTP {}", url, status);
        return Err(PrepError::Status {
            url,
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| classify_error(&url, e))?;

    tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);

    decode_text(&url, bytes.to_vec())
}

/// Decodes a response body as UTF-8, dropping a leading byte order mark
fn decode_text(url: &str, bytes: Vec<u8>) -> Result<String, PrepError> {
    let mut text = String::from_utf8(bytes).map_err(|source| PrepError::Decode {
        url: url.to_string(),
        source,
    })?;

    if text.starts_with('\u{feff}') {
        text.replace_range(..'\u{feff}'.len_utf8(), "");
    }

    Ok(text)
}

fn classify_error(url: &str, error: reqwest::Error) -> PrepError {
    if error.is_timeout() {
        PrepError::Timeout {
            url: url.to_string(),
        }
    } else {
        PrepError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
