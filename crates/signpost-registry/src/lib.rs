//! Short-link registry service.
//!
//! This crate provides [`LinkRegistry`], the domain logic for managing
//! short-link redirects keyed by `(domain, slug)`: creation, deletion,
//! hit statistics, bulk listing, slug autocompletion, and resolution.
//! The backing store and the audit sink are injected; the registry never
//! reads ambient state.
//!
//! # Example
//!
//! ```rust,no_run
//! use signpost_core::DomainAllowList;
//! use signpost_notify::NullSink;
//! use signpost_registry::{CreateLink, LinkRegistry};
//! use signpost_store::MemoryKvStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let domains = DomainAllowList::new(["go.example.com"]);
//! let registry = LinkRegistry::new(MemoryKvStore::new(), NullSink, domains);
//!
//! let created = registry
//!     .create(
//!         CreateLink::builder()
//!             .domain("go.example.com")
//!             .url("https://example.org/some/deep/page")
//!             .slug("docs")
//!             .actor("ops")
//!             .build(),
//!     )
//!     .await?;
//! println!("short link ready: {}", created.short_url);
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod service;

pub use model::{
    CreateLink, CreatedLink, DeletedLink, DomainLinks, LinkEntry, ResolvedLink, Suggestion,
};
pub use service::LinkRegistry;
