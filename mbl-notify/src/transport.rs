use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Recipient rejected the message: {0}")]
    Rejected(String),
}

/// Outbound seam for one chat message to one recipient. The production
/// implementation is [`crate::TelegramClient`]; tests substitute their own.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, recipient: &str, text: &str, html: bool) -> Result<(), TransportError>;
}
