use crate::commands::BotData;
use crate::error::Error;
use crate::utils::message::{split_message, DISCORD_MESSAGE_LIMIT};
use poise::serenity_prelude as serenity;
use tracing::error;

/// Gateway event handler for the text `!ask` / `/ask` commands
///
/// Serenity runs each event on its own task, so one slow answer never blocks another channel.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        let from_self = new_message.author.id == framework.bot_id;

        if let Some(reply) = data
            .dispatcher
            .dispatch(from_self, &new_message.author.name, &new_message.content)
            .await
        {
            send_reply(ctx, new_message.channel_id, &reply).await?;
        }
    }

    Ok(())
}

/// Send a reply, split to fit Discord's message limit
pub async fn send_reply(
    ctx: &serenity::Context,
    channel_id: serenity::ChannelId,
    reply: &str,
) -> Result<(), Error> {
    for chunk in split_message(reply, DISCORD_MESSAGE_LIMIT) {
        if let Err(e) = channel_id.say(ctx, chunk).await {
            error!("Error while sending reply to {}: {:?}", channel_id, e);
            return Err(e.into());
        }
    }

    Ok(())
}
