//! Telegram runtime entrypoint.

use crate::bot::{Inbound, Relay, RelayOptions};
use crate::config::Settings;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::{debug, info};

/// Run the relay until ctrl-c.
pub async fn run_bot(settings: Arc<Settings>) {
    let bot = Bot::new(settings.telegram_token.clone());
    let relay = Arc::new(Relay::new(
        Arc::new(bot.clone()),
        RelayOptions::from(settings.as_ref()),
    ));

    info!(
        "Relay initialized (destination: {})",
        relay.destination()
    );

    let handler = setup_handler();

    info!("Bot is starting...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![relay])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

fn setup_handler() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry().branch(Update::filter_message().endpoint(handle_message))
}

async fn handle_message(
    msg: Message,
    relay: Arc<Relay<Bot>>,
) -> Result<(), teloxide::RequestError> {
    debug!(chat_id = msg.chat.id.0, message_id = msg.id.0, "Received message");
    relay.process(Inbound::from_message(&msg)).await;
    respond(())
}
