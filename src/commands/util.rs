use crate::commands::{create_success_embed, CommandResult, Context};
use rust_i18n::t;

/// Check that the bot is responsive and which group it answers for
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> CommandResult {
    let group = ctx.data().config.default_group_config()?;

    ctx.send(poise::CreateReply::default().embed(create_success_embed(
        &t!("ping_command"),
        &t!("ping_response", group = group.name.clone()),
    )))
    .await?;
    Ok(())
}
