use std::sync::Arc;

use serde::Serialize;

use crate::telegram::TelegramClient;
use crate::transport::MessageTransport;

/// Outcome of one delivery attempt. The synthetic misconfiguration result
/// carries an empty recipient.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResult {
    pub recipient: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Fans one message out to every configured recipient, one attempt each,
/// failures isolated per recipient.
#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn MessageTransport>,
    recipients: Vec<String>,
    has_credential: bool,
}

impl Notifier {
    pub fn telegram(bot_token: &str, recipients: Vec<String>) -> Self {
        Self {
            transport: Arc::new(TelegramClient::new(bot_token)),
            recipients,
            has_credential: !bot_token.is_empty(),
        }
    }

    /// Caller supplies the transport; used by tests and by any non-Telegram
    /// channel that implements [`MessageTransport`].
    pub fn with_transport(transport: Arc<dyn MessageTransport>, recipients: Vec<String>) -> Self {
        Self {
            transport,
            recipients,
            has_credential: true,
        }
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Deliver `text` to every recipient, in order, one attempt per
    /// recipient. Never errors: a missing credential or empty recipient list
    /// yields a single not-ok result, and per-recipient failures are captured
    /// in the returned records without blocking the remaining attempts.
    pub async fn broadcast(&self, text: &str, html: bool) -> Vec<DeliveryResult> {
        if !self.has_credential || self.recipients.is_empty() {
            return vec![DeliveryResult {
                recipient: String::new(),
                ok: false,
                detail: Some("Missing Telegram bot token or recipient list".to_string()),
            }];
        }

        let mut results = Vec::with_capacity(self.recipients.len());
        for recipient in &self.recipients {
            match self.transport.send(recipient, text, html).await {
                Ok(()) => results.push(DeliveryResult {
                    recipient: recipient.clone(),
                    ok: true,
                    detail: None,
                }),
                Err(err) => {
                    tracing::warn!(%recipient, error = %err, "Telegram delivery failed");
                    results.push(DeliveryResult {
                        recipient: recipient.clone(),
                        ok: false,
                        detail: Some(err.to_string()),
                    });
                }
            }
        }
        results
    }
}
