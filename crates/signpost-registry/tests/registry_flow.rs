//! End-to-end registry flow over the in-memory store.

use signpost_core::{DomainAllowList, RegistryError};
use signpost_notify::NullSink;
use signpost_registry::{CreateLink, LinkRegistry, Suggestion};
use signpost_store::MemoryKvStore;

fn registry() -> LinkRegistry<MemoryKvStore, NullSink> {
    let domains = DomainAllowList::new(["go.example.com", "go.other.app"]);
    LinkRegistry::new(MemoryKvStore::new(), NullSink, domains)
}

fn request(domain: &str, url: &str, slug: &str) -> CreateLink {
    CreateLink::builder()
        .domain(domain)
        .url(url)
        .slug(slug)
        .actor("integration")
        .build()
}

#[tokio::test]
async fn full_link_lifecycle() {
    let registry = registry();

    // Create on two domains.
    let created = registry
        .create(request("go.example.com", "https://example.org/page", "abc"))
        .await
        .unwrap();
    assert_eq!(created.short_url, "https://go.example.com/abc");

    registry
        .create(request("go.other.app", "https://example.org/other", "xyz"))
        .await
        .unwrap();

    // Autocomplete sees only the matching domain's slugs.
    let suggestions = registry.autocomplete("go.example.com").await.unwrap();
    assert_eq!(suggestions, vec![Suggestion::slug("abc")]);

    // Resolving serves the target and counts the hit.
    let resolved = registry.resolve("go.example.com", "abc").await.unwrap();
    assert_eq!(resolved.redirect_url, "https://example.org/page");
    assert_eq!(resolved.hits, 1);

    // Stats reflect the resolution without adding another.
    let record = registry.stats("go.example.com", "abc").await.unwrap();
    assert_eq!(record.hits, 1);

    // Listing groups both domains.
    let groups = registry.list().await.unwrap();
    assert_eq!(groups.len(), 2);

    // Delete, then every lookup path agrees it is gone.
    registry
        .delete("go.example.com", "abc", "integration")
        .await
        .unwrap();

    assert!(matches!(
        registry.stats("go.example.com", "abc").await,
        Err(RegistryError::NotFound { .. })
    ));
    assert!(matches!(
        registry.resolve("go.example.com", "abc").await,
        Err(RegistryError::NotFound { .. })
    ));

    let suggestions = registry.autocomplete("go.example.com").await.unwrap();
    assert!(suggestions[0].is_sentinel());

    let groups = registry.list().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].domain, "go.other.app");
}
