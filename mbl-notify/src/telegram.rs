use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::transport::{MessageTransport, TransportError};

const TELEGRAM_API: &str = "https://api.telegram.org";

/// Telegram Bot API client. One bot token shared across all recipients.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendMessageReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, TELEGRAM_API)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl MessageTransport for TelegramClient {
    async fn send(&self, recipient: &str, text: &str, html: bool) -> Result<(), TransportError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let body = SendMessage {
            chat_id: recipient,
            text,
            parse_mode: html.then_some("HTML"),
        };

        let reply = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?
            .json::<SendMessageReply>()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        // Telegram answers 200 with ok=false for semantic failures
        // (bad chat id, bot blocked); treat those as delivery failures too.
        if reply.ok {
            Ok(())
        } else {
            Err(TransportError::Rejected(
                reply.description.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
