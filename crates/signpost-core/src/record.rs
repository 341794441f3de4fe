use crate::error::RegistryError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#].[^\s]*$").expect("url pattern is valid")
});

/// A stored short-link record.
///
/// This is the only persisted schema: a JSON object with exactly the
/// fields `redirect_url` and `hits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The absolute URL the short link redirects to.
    pub redirect_url: String,
    /// Number of times the link has been resolved.
    pub hits: u64,
}

impl LinkRecord {
    /// Creates a fresh record with a validated redirect target and zero hits.
    pub fn new(redirect_url: impl Into<String>) -> std::result::Result<Self, RegistryError> {
        let redirect_url = redirect_url.into();
        validate_redirect_url(&redirect_url)?;
        Ok(Self {
            redirect_url,
            hits: 0,
        })
    }
}

/// Validates that a redirect target is an absolute http(s) URL.
pub fn validate_redirect_url(url: &str) -> std::result::Result<(), RegistryError> {
    if url.is_empty() {
        return Err(RegistryError::MissingField("url"));
    }
    if !URL_RE.is_match(url) {
        return Err(RegistryError::InvalidUrl(format!(
            "must be an absolute http(s) URL: '{}'",
            url
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_zero_hits() {
        let record = LinkRecord::new("https://example.org/page").unwrap();
        assert_eq!(record.redirect_url, "https://example.org/page");
        assert_eq!(record.hits, 0);
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(LinkRecord::new("http://example.org").is_ok());
        assert!(LinkRecord::new("HTTPS://EXAMPLE.ORG/PAGE").is_ok());
    }

    #[test]
    fn rejects_non_urls() {
        assert!(matches!(
            LinkRecord::new("not-a-url"),
            Err(RegistryError::InvalidUrl(_))
        ));
        assert!(matches!(
            LinkRecord::new("ftp://example.org"),
            Err(RegistryError::InvalidUrl(_))
        ));
        assert!(matches!(
            LinkRecord::new("https://bad url.example"),
            Err(RegistryError::InvalidUrl(_))
        ));
        assert!(matches!(
            LinkRecord::new(""),
            Err(RegistryError::MissingField("url"))
        ));
    }

    #[test]
    fn wire_format_field_names() {
        let record = LinkRecord::new("https://example.org").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"redirect_url":"https://example.org","hits":0}"#);
    }

    #[test]
    fn rejects_json_missing_fields() {
        assert!(serde_json::from_str::<LinkRecord>(r#"{"redirect_url":"https://x"}"#).is_err());
        assert!(serde_json::from_str::<LinkRecord>(r#"{"hits":3}"#).is_err());
        assert!(serde_json::from_str::<LinkRecord>("not-json").is_err());
    }
}
