//! URL checks for user input and API endpoint construction.

use url::Url;

/// Errors that can occur while checking or joining URLs.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses `input` and checks it is an absolute http/https URL with a host.
///
/// Rejects `javascript:`, `data:`, `file:`, `ftp:` and other schemes.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlNormalizationError::MissingHost`] when no host is present.
pub fn ensure_web_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let url =
        Url::parse(input.trim()).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(url)
}

/// Joins an API path onto the configured base address.
///
/// The base may or may not end with a slash and may carry a path prefix
/// (e.g. a reverse proxy mount point); the prefix is preserved.
///
/// ```ignore
/// let base = Url::parse("https://api.example.com/shortener").unwrap();
/// assert_eq!(
///     api_endpoint(&base, "/api/url/myurls").unwrap().as_str(),
///     "https://api.example.com/shortener/api/url/myurls"
/// );
/// ```
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] if the join fails.
pub fn api_endpoint(base: &Url, path: &str) -> Result<Url, UrlNormalizationError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    base.join(path.trim_start_matches('/'))
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))
}
