use crate::model::{
    CreateLink, CreatedLink, DeletedLink, DomainLinks, LinkEntry, ResolvedLink, Suggestion,
};
use signpost_core::key::KEY_SEPARATOR;
use signpost_core::{
    AuditSink, DomainAllowList, KvStore, LinkKey, LinkRecord, RegistryError, Result, StoreError,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Slugs the redirect surface routes to its own endpoints; a record may
/// exist under one of these keys but is never served.
const RESERVED_SLUGS: &[&str] = &["create", "stats", "list"];

/// The short-link registry.
///
/// Wraps a [`KvStore`] and an [`AuditSink`] to handle:
/// - validation (allow-listed domains, slug and URL patterns)
/// - key construction and record (de)serialization
/// - hit counting on resolution
/// - grouping and autocompletion over the full keyspace
///
/// Mutating operations report to the audit sink on a detached task;
/// delivery failure never affects the operation's outcome.
#[derive(Debug, Clone)]
pub struct LinkRegistry<S, N> {
    store: Arc<S>,
    sink: Arc<N>,
    domains: DomainAllowList,
}

impl<S: KvStore, N: AuditSink> LinkRegistry<S, N> {
    /// Creates a registry over the given store, sink, and domain allow-list.
    pub fn new(store: S, sink: N, domains: DomainAllowList) -> Self {
        Self {
            store: Arc::new(store),
            sink: Arc::new(sink),
            domains,
        }
    }

    /// Creates a short link, silently overwriting any record already at
    /// `domain:slug` (last write wins).
    pub async fn create(&self, request: CreateLink) -> Result<CreatedLink> {
        let CreateLink {
            domain,
            url,
            slug,
            actor,
        } = request;

        if domain.is_empty() {
            return Err(RegistryError::MissingField("domain"));
        }
        if url.is_empty() {
            return Err(RegistryError::MissingField("url"));
        }
        if slug.is_empty() {
            return Err(RegistryError::MissingField("slug"));
        }
        if !self.domains.contains(&domain) {
            return Err(RegistryError::UnknownDomain(domain));
        }

        let record = LinkRecord::new(url)?;
        let key = LinkKey::new(domain, slug)?;

        let value = encode_record(&record)?;
        self.store.put(&key.storage_key(), &value).await?;

        info!(key = %key, target = %record.redirect_url, "created short link");
        self.dispatch_audit(format!(
            "{} created {} -> {}",
            actor,
            key.short_url(),
            record.redirect_url
        ));

        Ok(CreatedLink {
            short_url: key.short_url(),
            redirect_url: record.redirect_url,
            key,
        })
    }

    /// Deletes a short link. `slug_or_link` may be a bare slug or the full
    /// short URL; a missing key fails with `NotFound` and mutates nothing.
    pub async fn delete(
        &self,
        domain: &str,
        slug_or_link: &str,
        actor: &str,
    ) -> Result<DeletedLink> {
        if domain.is_empty() {
            return Err(RegistryError::MissingField("domain"));
        }
        if slug_or_link.is_empty() {
            return Err(RegistryError::MissingField("slug"));
        }

        let slug = strip_short_url(domain, slug_or_link);
        let key = LinkKey::new_unchecked(domain, slug);
        let storage_key = key.storage_key();

        let Some(raw) = self.store.get(&storage_key).await? else {
            return Err(RegistryError::NotFound { key: storage_key });
        };

        // Keep the previous target for the audit trail; a corrupt record
        // is still deleted as a whole unit.
        let redirect_url = match serde_json::from_str::<LinkRecord>(&raw) {
            Ok(record) => Some(record.redirect_url),
            Err(e) => {
                warn!(key = %storage_key, error = %e, "deleting unreadable record");
                None
            }
        };

        self.store.delete(&storage_key).await?;

        info!(key = %key, "deleted short link");
        self.dispatch_audit(format!(
            "{} deleted {} (was {})",
            actor,
            key.short_url(),
            redirect_url.as_deref().unwrap_or("an unreadable record")
        ));

        Ok(DeletedLink { key, redirect_url })
    }

    /// Returns the stored record for `domain:slug` without touching the
    /// hit counter.
    pub async fn stats(&self, domain: &str, slug: &str) -> Result<LinkRecord> {
        let key = LinkKey::new_unchecked(domain, slug);
        let storage_key = key.storage_key();

        let Some(raw) = self.store.get(&storage_key).await? else {
            return Err(RegistryError::NotFound { key: storage_key });
        };

        parse_record(&storage_key, &raw)
    }

    /// Resolves a short link to its target, incrementing the hit counter.
    ///
    /// The read-increment-write pair is not transactional; concurrent
    /// resolutions of the same link may lose counts.
    pub async fn resolve(&self, domain: &str, slug: &str) -> Result<ResolvedLink> {
        let key = LinkKey::new_unchecked(domain, slug);
        let storage_key = key.storage_key();

        if RESERVED_SLUGS.contains(&slug) {
            return Err(RegistryError::NotFound { key: storage_key });
        }

        let Some(raw) = self.store.get(&storage_key).await? else {
            return Err(RegistryError::NotFound { key: storage_key });
        };

        let mut record = parse_record(&storage_key, &raw)?;
        record.hits += 1;

        let value = encode_record(&record)?;
        self.store.put(&storage_key, &value).await?;

        debug!(key = %key, hits = record.hits, "resolved short link");
        Ok(ResolvedLink {
            redirect_url: record.redirect_url,
            hits: record.hits,
        })
    }

    /// Enumerates every stored link, grouped by domain in discovery order.
    ///
    /// Malformed keys, vanished values, unreadable records, and per-key
    /// read failures are skipped and logged; they never abort the scan.
    pub async fn list(&self) -> Result<Vec<DomainLinks>> {
        let keys = self.store.list_keys(None).await?;

        let mut groups: Vec<DomainLinks> = Vec::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();

        for raw_key in keys {
            let Some(key) = LinkKey::parse(&raw_key) else {
                warn!(key = %raw_key, "skipping malformed key");
                continue;
            };

            let value = match self.store.get(&raw_key).await {
                Ok(Some(value)) => value,
                Ok(None) => {
                    warn!(key = %raw_key, "key vanished during enumeration, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(key = %raw_key, error = %e, "skipping unreadable key");
                    continue;
                }
            };

            let record = match serde_json::from_str::<LinkRecord>(&value) {
                Ok(record) => record,
                Err(e) => {
                    warn!(key = %raw_key, error = %e, "skipping unparseable record");
                    continue;
                }
            };

            let entry = LinkEntry {
                slug: key.slug().to_owned(),
                record,
            };
            match group_index.get(key.domain()) {
                Some(&i) => groups[i].links.push(entry),
                None => {
                    group_index.insert(key.domain().to_owned(), groups.len());
                    groups.push(DomainLinks {
                        domain: key.domain().to_owned(),
                        links: vec![entry],
                    });
                }
            }
        }

        Ok(groups)
    }

    /// Suggests slugs registered under `domain`.
    ///
    /// A domain with no links yields exactly one sentinel suggestion
    /// rather than an empty list, so completion UIs always have something
    /// to show.
    pub async fn autocomplete(&self, domain: &str) -> Result<Vec<Suggestion>> {
        let prefix = format!("{domain}{KEY_SEPARATOR}");
        let keys = self.store.list_keys(Some(&prefix)).await?;

        let suggestions: Vec<Suggestion> = keys
            .iter()
            .filter_map(|key| key.split_once(KEY_SEPARATOR))
            .map(|(_, slug)| Suggestion::slug(slug))
            .collect();

        if suggestions.is_empty() {
            return Ok(vec![Suggestion::none_available()]);
        }
        Ok(suggestions)
    }

    /// Hands a message to the audit sink on a detached task.
    fn dispatch_audit(&self, message: String) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            sink.notify(&message).await;
        });
    }
}

/// Reduces a full short URL back to its slug; bare slugs pass through.
fn strip_short_url<'a>(domain: &str, slug_or_link: &'a str) -> &'a str {
    let stripped = slug_or_link
        .strip_prefix("https://")
        .or_else(|| slug_or_link.strip_prefix("http://"))
        .unwrap_or(slug_or_link);
    match stripped.strip_prefix(domain) {
        Some(path) => path.trim_start_matches('/'),
        None => slug_or_link,
    }
}

fn parse_record(key: &str, raw: &str) -> Result<LinkRecord> {
    serde_json::from_str(raw).map_err(|e| RegistryError::Corrupt {
        key: key.to_owned(),
        reason: e.to_string(),
    })
}

fn encode_record(record: &LinkRecord) -> Result<String> {
    serde_json::to_string(record)
        .map_err(|e| StoreError::InvalidData(format!("failed to encode record: {e}")).into())
}
