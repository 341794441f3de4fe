use async_trait::async_trait;
use signpost_core::AuditSink;
use tracing::debug;

/// Sink that discards audit messages, for deployments without a webhook.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl AuditSink for NullSink {
    async fn notify(&self, message: &str) {
        debug!(message = %message, "audit message discarded (no sink configured)");
    }
}
