use signpost_core::{LinkKey, LinkRecord};
use typed_builder::TypedBuilder;

/// Sentinel suggestion value returned when a domain has no links.
///
/// Real slugs never contain an underscore, so this can always be told
/// apart from a genuine completion.
pub const NO_LINKS_VALUE: &str = "__no-links__";

/// Arguments for creating a short link.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateLink {
    /// Domain the link is registered on; must be on the allow-list.
    #[builder(setter(into))]
    pub domain: String,
    /// Absolute URL the link redirects to.
    #[builder(setter(into))]
    pub url: String,
    /// Path segment identifying the link under the domain.
    #[builder(setter(into))]
    pub slug: String,
    /// Who requested the link; echoed into the audit trail.
    #[builder(setter(into))]
    pub actor: String,
}

/// Outcome of a successful create.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub key: LinkKey,
    /// The fully-qualified short URL, `https://{domain}/{slug}`.
    pub short_url: String,
    pub redirect_url: String,
}

/// Outcome of a successful delete.
#[derive(Debug, Clone)]
pub struct DeletedLink {
    pub key: LinkKey,
    /// The deleted record's previous redirect target, when it was readable.
    pub redirect_url: Option<String>,
}

/// Outcome of resolving a short link: the target plus the updated count.
#[derive(Debug, Clone)]
pub struct ResolvedLink {
    pub redirect_url: String,
    pub hits: u64,
}

/// One link within a domain group.
#[derive(Debug, Clone)]
pub struct LinkEntry {
    pub slug: String,
    pub record: LinkRecord,
}

/// All surviving links under one domain, in discovery order.
#[derive(Debug, Clone)]
pub struct DomainLinks {
    pub domain: String,
    pub links: Vec<LinkEntry>,
}

/// An autocomplete suggestion: display name plus the value submitted back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub value: String,
}

impl Suggestion {
    /// Suggestion for an existing slug; name and value are both the slug.
    pub fn slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: slug.clone(),
            value: slug,
        }
    }

    /// The sentinel returned instead of an empty suggestion list.
    pub fn none_available() -> Self {
        Self {
            name: "No short links on this domain".to_string(),
            value: NO_LINKS_VALUE.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == NO_LINKS_VALUE
    }
}
