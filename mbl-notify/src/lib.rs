pub mod fanout;
pub mod telegram;
pub mod transport;

pub use fanout::{DeliveryResult, Notifier};
pub use telegram::TelegramClient;
pub use transport::{MessageTransport, TransportError};
