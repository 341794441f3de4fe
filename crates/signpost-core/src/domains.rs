/// The fixed set of domains short links may be registered on.
///
/// Supplied by the hosting environment and passed to the registry by the
/// caller; membership checks are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct DomainAllowList {
    domains: Vec<String>,
}

impl DomainAllowList {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.into().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains
            .iter()
            .any(|d| d.eq_ignore_ascii_case(domain))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
