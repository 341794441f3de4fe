//! Core types and traits for the Signpost short-link registry.
//!
//! This crate provides the shared data model, validation rules, and the
//! store/sink contracts used by the registry service and its adapters.

pub mod domains;
pub mod error;
pub mod key;
pub mod notify;
pub mod record;
pub mod store;

pub use domains::DomainAllowList;
pub use error::{RegistryError, Result, StoreError};
pub use key::LinkKey;
pub use notify::AuditSink;
pub use record::LinkRecord;
pub use store::KvStore;
