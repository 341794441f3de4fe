use async_trait::async_trait;

/// Destination for human-readable audit messages about mutating operations.
///
/// Delivery is best-effort: implementations log failures locally and never
/// surface them, so a sink can never fail the operation that triggered it.
#[async_trait]
pub trait AuditSink: Send + Sync + 'static {
    async fn notify(&self, message: &str);
}
