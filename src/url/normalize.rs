use crate::UrlError;
use url::Url;

/// Normalizes a seed URL before a discovery run
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Parse the URL; reject if malformed
/// 3. Only `http` and `https` are accepted
/// 4. A host is required
/// 5. Remove fragment (everything after #)
///
/// # Examples
///
/// ```
/// use contact_scout::url::normalize_url;
///
/// let url = normalize_url("  https://College.edu.np/#top ").unwrap();
/// assert_eq!(url.as_str(), "https://college.edu.np/");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let mut url = Url::parse(trimmed).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);
    Ok(url)
}

/// Returns the URL as a string without trailing slashes, used as the base
/// that probe paths such as `/contact` are appended to
pub fn strip_trailing_slash(url: &Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}
