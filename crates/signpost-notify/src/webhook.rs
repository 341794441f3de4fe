use async_trait::async_trait;
use serde::Serialize;
use signpost_core::AuditSink;
use tracing::{trace, warn};

/// Wire format accepted by the audit webhook endpoint.
///
/// `allowed_mentions.parse` stays empty so that user or role references
/// quoted in free-text content are never expanded into pings.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
    allowed_mentions: AllowedMentions,
}

#[derive(Debug, Serialize)]
struct AllowedMentions {
    parse: [&'static str; 0],
}

impl<'a> WebhookPayload<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            allowed_mentions: AllowedMentions { parse: [] },
        }
    }
}

/// Sink that POSTs audit messages to a configured webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    endpoint: String,
    client: reqwest::Client,
}

impl WebhookSink {
    /// Creates a sink targeting `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a sink reusing an existing HTTP client.
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl AuditSink for WebhookSink {
    async fn notify(&self, message: &str) {
        let payload = WebhookPayload::new(message);

        match self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                trace!("delivered audit message");
            }
            Ok(response) => {
                warn!(status = %response.status(), "audit webhook rejected message");
            }
            Err(e) => {
                warn!(error = %e, "failed to deliver audit message");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_suppresses_mentions() {
        let payload = WebhookPayload::new("deleted https://go.example.com/abc");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "content": "deleted https://go.example.com/abc",
                "allowed_mentions": { "parse": [] },
            })
        );
    }
}
