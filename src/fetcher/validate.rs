use crate::PrepError;
use url::Url;

/// Checks that `raw` names a plain-text file reachable over HTTP(S)
///
/// The URL must end in `.txt` (case-insensitive, surrounding whitespace
/// ignored) and parse as an absolute `http` or `https` URL. No network
/// activity happens here.
///
/// # Example
///
/// ```
/// use gutenprep::fetcher::validate_text_url;
///
/// assert!(validate_text_url("https://www.gutenberg.org/files/1342/1342-0.txt").is_ok());
/// assert!(validate_text_url("https://example.com/book").is_err());
/// ```
pub fn validate_text_url(raw: &str) -> Result<Url, PrepError> {
    let trimmed = raw.trim();

    if !trimmed.to_lowercase().ends_with(".txt") {
        return Err(invalid(trimmed, "URL must point to a .txt file"));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| invalid(trimmed, &format!("not an absolute URL ({})", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(
            trimmed,
            &format!("unsupported scheme '{}', expected http or https", other),
        )),
    }
}

fn invalid(url: &str, reason: &str) -> PrepError {
    PrepError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
