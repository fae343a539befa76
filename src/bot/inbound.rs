//! Extraction of the relay-relevant parts of an incoming Telegram message.

use crate::text::{annotations_from_entities, Annotation};
use teloxide::types::Message;

/// What an incoming message carries, as far as the relay is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A photo, optionally captioned.
    Photo {
        /// File ID of the largest available photo size.
        file_id: String,
        /// Caption text, if any.
        caption: Option<String>,
        /// Caption entities.
        annotations: Vec<Annotation>,
    },
    /// A plain text message.
    Text {
        /// Message body.
        text: String,
        /// Text entities.
        annotations: Vec<Annotation>,
    },
    /// Anything else (stickers, voice, service messages, ...).
    Unsupported,
}

impl Inbound {
    /// Classifies a Telegram message. Photos win over text.
    #[must_use]
    pub fn from_message(msg: &Message) -> Self {
        if let Some(photo) = msg.photo().and_then(<[_]>::last) {
            let caption = msg.caption().map(str::to_string);
            // Entities are only meaningful together with the caption they index
            let annotations = if caption.is_some() {
                msg.caption_entities()
                    .map(annotations_from_entities)
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            return Self::Photo {
                file_id: photo.file.id.to_string(),
                caption,
                annotations,
            };
        }

        if let Some(text) = msg.text() {
            return Self::Text {
                text: text.to_string(),
                annotations: msg.entities().map(annotations_from_entities).unwrap_or_default(),
            };
        }

        Self::Unsupported
    }

    /// Short label used in log lines.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Photo { .. } => "photo",
            Self::Text { .. } => "text",
            Self::Unsupported => "unsupported",
        }
    }
}
