//! Outbound side of the relay.
//!
//! [`ChannelSender`] is the only place the relay talks to the network. The
//! production implementation is [`teloxide::Bot`]; tests plug in a recorder.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile, LinkPreviewOptions};
use teloxide::RequestError;

/// Capability to post into the destination channel.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    /// Send a text message.
    ///
    /// # Errors
    ///
    /// Returns the Telegram request error if delivery fails.
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        disable_link_preview: bool,
    ) -> Result<(), RequestError>;

    /// Send a photo by file ID. An empty caption is sent as no caption.
    ///
    /// # Errors
    ///
    /// Returns the Telegram request error if delivery fails.
    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: String,
        caption: String,
        disable_notification: bool,
    ) -> Result<(), RequestError>;
}

#[async_trait]
impl ChannelSender for Bot {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        disable_link_preview: bool,
    ) -> Result<(), RequestError> {
        let mut req = self.send_message(chat_id, text);
        if disable_link_preview {
            req = req.link_preview_options(disabled_link_preview());
        }
        req.await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: String,
        caption: String,
        disable_notification: bool,
    ) -> Result<(), RequestError> {
        let mut req = Requester::send_photo(self, chat_id, InputFile::file_id(FileId(file_id)));
        if !caption.is_empty() {
            req = req.caption(caption);
        }
        if disable_notification {
            req = req.disable_notification(true);
        }
        req.await?;
        Ok(())
    }
}

const fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}
