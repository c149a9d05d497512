//! Composition and parsing of the textual short URL form.
//!
//! A short URL is the configured base prefix immediately followed by the key,
//! e.g. `http://sho.rt/` + `abc123`.

use crate::error::RegistryError;
use serde_json::json;

/// Joins the base prefix and a key.
pub fn compose_short_url(base_url: &str, key: &str) -> String {
    format!("{}{}", base_url, key)
}

/// Extracts the key from a short URL.
///
/// # Errors
///
/// Returns [`RegistryError::MalformedShortUrl`] if `short_url` does not start
/// with `base_url` or nothing follows the prefix.
pub fn extract_key<'a>(base_url: &str, short_url: &'a str) -> Result<&'a str, RegistryError> {
    let Some(key) = short_url.strip_prefix(base_url) else {
        return Err(RegistryError::malformed_short_url(
            "Invalid short URL format",
            json!({ "short_url": short_url, "expected_prefix": base_url }),
        ));
    };

    if key.is_empty() {
        return Err(RegistryError::malformed_short_url(
            "Short URL key is missing",
            json!({ "short_url": short_url }),
        ));
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://sho.rt/";

    #[test]
    fn test_compose_short_url() {
        assert_eq!(compose_short_url(BASE, "abc123"), "http://sho.rt/abc123");
    }

    #[test]
    fn test_extract_key() {
        assert_eq!(extract_key(BASE, "http://sho.rt/abc123").unwrap(), "abc123");
    }

    #[test]
    fn test_extract_key_without_prefix() {
        let result = extract_key(BASE, "invalid-url");
        assert!(matches!(
            result,
            Err(RegistryError::MalformedShortUrl { .. })
        ));
    }

    #[test]
    fn test_extract_key_other_host() {
        let result = extract_key(BASE, "https://sho.rt/abc123");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_key_empty_key() {
        let err = extract_key(BASE, "http://sho.rt/").unwrap_err();
        assert!(matches!(err, RegistryError::MalformedShortUrl { .. }));
        assert_eq!(err.to_string(), "Short URL key is missing");
    }

    #[test]
    fn test_compose_then_extract() {
        let short_url = compose_short_url(BASE, "my_alias-1");
        assert_eq!(extract_key(BASE, &short_url).unwrap(), "my_alias-1");
    }
}
