//! URL validation and normalization for page fetches.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates and normalizes a page URL.
///
/// Surrounding whitespace is trimmed and `https://` is prepended when the URL
/// has no http/https scheme. The result must parse, use http or https, and be
/// at most [`MAX_URL_LENGTH`] bytes long.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` describing why the URL was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<String, FetchError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("URL is empty".to_string()));
    }

    let normalized = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if has_scheme(url) {
        warn!("Rejecting URL with unsupported scheme: {url}");
        return Err(FetchError::InvalidUrl(format!(
            "unsupported scheme in {url} (only http and https are allowed)"
        )));
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return Err(FetchError::InvalidUrl(format!(
            "URL is {} bytes long (limit {MAX_URL_LENGTH})",
            normalized.len()
        )));
    }

    match ::url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some() => Ok(normalized),
        Ok(_) => Err(FetchError::InvalidUrl(format!("{url} has no host"))),
        Err(e) => {
            warn!("Rejecting invalid URL {url}: {e}");
            Err(FetchError::InvalidUrl(format!("{url}: {e}")))
        }
    }
}

/// True when `url` starts with `<scheme>://`.
fn has_scheme(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;
    use crate::error_handling::FetchError;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_scheme() {
        assert_eq!(
            validate_and_normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            validate_and_normalize_url("  https://example.com/a?b=1 ").unwrap(),
            "https://example.com/a?b=1"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_other_schemes() {
        let err = validate_and_normalize_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_validate_and_normalize_url_with_embedded_url() {
        assert_eq!(
            validate_and_normalize_url("example.com/?next=http://other.com").unwrap(),
            "https://example.com/?next=http://other.com"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_garbage() {
        assert!(validate_and_normalize_url("not a valid url!!!").is_err());
        assert!(validate_and_normalize_url("").is_err());
        assert!(validate_and_normalize_url("   ").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_with_port_and_path() {
        assert_eq!(
            validate_and_normalize_url("example.com:8080/path?query=value").unwrap(),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(2100));
        let err = validate_and_normalize_url(&long).unwrap_err();
        assert!(err.to_string().contains("limit 2048"));
    }
}
