/// Classification of incoming Telegram messages
pub mod inbound;
/// Normalize-and-forward handling for a single message
pub mod relay;
/// Outbound channel capability and its Telegram implementation
pub mod sender;

pub use inbound::Inbound;
pub use relay::{Outcome, Relay, RelayError, RelayOptions};
pub use sender::ChannelSender;
