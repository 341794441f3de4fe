use crate::error::RegistryError;
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

/// Separator between the domain and slug components of a storage key.
///
/// The colon is reserved: neither component may contain one.
pub const KEY_SEPARATOR: char = ':';

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9-]+$").expect("slug pattern is valid"));

/// A validated `(domain, slug)` pair identifying a short link.
///
/// Keys serialize to `domain:slug` in the backing store. Whether the
/// domain is actually registered is checked against a
/// [`DomainAllowList`](crate::DomainAllowList) by the registry, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    domain: String,
    slug: String,
}

impl LinkKey {
    /// Creates a key after validating both components.
    ///
    /// Slugs must match `[a-z0-9-]+` (case-insensitive); domains must be
    /// non-empty and colon-free.
    pub fn new(
        domain: impl Into<String>,
        slug: impl Into<String>,
    ) -> std::result::Result<Self, RegistryError> {
        let domain = domain.into();
        let slug = slug.into();

        if domain.is_empty() {
            return Err(RegistryError::MissingField("domain"));
        }
        if domain.contains(KEY_SEPARATOR) {
            return Err(RegistryError::UnknownDomain(domain));
        }
        if !SLUG_RE.is_match(&slug) {
            return Err(RegistryError::InvalidSlug(format!(
                "must contain only letters, digits, or hyphens: '{}'",
                slug
            )));
        }

        Ok(Self { domain, slug })
    }

    /// Creates a key without validating either component.
    ///
    /// Use this only for keys echoed back from user lookups or read from
    /// the store, where the registry applies its own existence check
    /// instead of pattern validation.
    pub fn new_unchecked(domain: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            slug: slug.into(),
        }
    }

    /// Splits a raw storage key into its components.
    ///
    /// Returns `None` when the separator is missing or either side of the
    /// first separator is empty. Used by bulk enumeration, which skips
    /// such keys instead of failing.
    pub fn parse(raw: &str) -> Option<Self> {
        let (domain, slug) = raw.split_once(KEY_SEPARATOR)?;
        if domain.is_empty() || slug.is_empty() {
            return None;
        }
        Some(Self {
            domain: domain.to_owned(),
            slug: slug.to_owned(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The key as stored, `domain:slug`.
    pub fn storage_key(&self) -> String {
        self.to_string()
    }

    /// The fully-qualified short URL, `https://{domain}/{slug}`.
    pub fn short_url(&self) -> String {
        format!("https://{}/{}", self.domain, self.slug)
    }
}

impl Display for LinkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.domain, KEY_SEPARATOR, self.slug)
    }
}
