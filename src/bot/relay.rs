//! Per-message relay logic: normalize, then forward to the destination channel.

use super::inbound::Inbound;
use super::sender::ChannelSender;
use crate::config::Settings;
use crate::text::normalize;
use std::sync::Arc;
use teloxide::types::ChatId;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors produced while forwarding a single message.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Telegram rejected or failed to deliver the outbound request.
    #[error("Failed to forward message")]
    Send(#[from] teloxide::RequestError),
}

/// Result of handling one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A photo was forwarded.
    PhotoForwarded,
    /// A text message was forwarded.
    TextForwarded,
    /// Normalization left nothing to send.
    SkippedEmpty,
    /// The message carried neither a photo nor text.
    Unsupported,
}

/// Delivery options applied to every forwarded message.
#[derive(Debug, Clone, Copy)]
pub struct RelayOptions {
    /// Destination channel.
    pub destination: ChatId,
    /// Disable link previews on text messages.
    pub disable_link_preview: bool,
    /// Send photos without a notification.
    pub silent_photos: bool,
}

impl From<&Settings> for RelayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            destination: settings.destination(),
            disable_link_preview: settings.disable_link_preview,
            silent_photos: settings.silent_photos,
        }
    }
}

/// Forwards cleaned-up messages into a single channel.
pub struct Relay<S: ChannelSender> {
    sender: Arc<S>,
    options: RelayOptions,
}

impl<S: ChannelSender> Relay<S> {
    /// Create a relay posting through `sender`.
    #[must_use]
    pub const fn new(sender: Arc<S>, options: RelayOptions) -> Self {
        Self { sender, options }
    }

    /// Destination channel of this relay.
    #[must_use]
    pub const fn destination(&self) -> ChatId {
        self.options.destination
    }

    /// Normalize and forward one message.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Send`] if the outbound request fails.
    pub async fn handle(&self, inbound: Inbound) -> Result<Outcome, RelayError> {
        match inbound {
            Inbound::Photo {
                file_id,
                caption,
                annotations,
            } => {
                let caption = caption
                    .map(|text| normalize(&text, &annotations))
                    .unwrap_or_default();
                self.sender
                    .send_photo(
                        self.options.destination,
                        file_id,
                        caption,
                        self.options.silent_photos,
                    )
                    .await?;
                info!("Photo message processed and forwarded to channel");
                Ok(Outcome::PhotoForwarded)
            }
            Inbound::Text { text, annotations } => {
                let text = normalize(&text, &annotations);
                if text.is_empty() {
                    warn!("Text message is empty after cleanup, not forwarding");
                    return Ok(Outcome::SkippedEmpty);
                }
                self.sender
                    .send_text(
                        self.options.destination,
                        text,
                        self.options.disable_link_preview,
                    )
                    .await?;
                info!("Text message processed and forwarded to channel");
                Ok(Outcome::TextForwarded)
            }
            Inbound::Unsupported => {
                info!("Message does not contain text, caption, or photo");
                Ok(Outcome::Unsupported)
            }
        }
    }

    /// Handle one message, logging any failure instead of returning it.
    ///
    /// A failed message never affects the ones after it.
    pub async fn process(&self, inbound: Inbound) -> Option<Outcome> {
        let kind = inbound.kind_name();
        match self.handle(inbound).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(kind, "Error processing message: {}", error_chain(&e));
                None
            }
        }
    }
}

/// Render an error together with all of its sources, outermost first.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
