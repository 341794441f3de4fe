//! Audit notification sinks for the Signpost registry.
//!
//! The registry reports every mutating operation to an
//! [`AuditSink`](signpost_core::AuditSink). Delivery is best-effort by
//! contract: these implementations log failures and never surface them,
//! so a broken webhook can never fail a create or delete.

pub mod null;
pub mod webhook;

pub use null::NullSink;
pub use webhook::WebhookSink;
