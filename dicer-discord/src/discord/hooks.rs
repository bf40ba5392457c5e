use super::utils::send_reply;
use serenity::framework::standard::macros::hook;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::debug;
use tracing::error;
use tracing::warn;

#[hook]
pub(crate) async fn before(_ctx: &Context, msg: &Message, command: &str) -> bool {
    debug!(
        "Dice command `{}` from `{}` in channel `{}`: `{}`",
        command, msg.author.name, msg.channel_id, msg.content
    );
    true
}

#[hook]
pub(crate) async fn after(_ctx: &Context, msg: &Message, command: &str, result: CommandResult) {
    if let Err(why) = result {
        error!(
            "Dice command `{}` from `{}` failed: `{:?}`",
            command, msg.author.name, why
        );
    }
}

/// Same answer as any other trigger the bot does not own
#[hook]
pub(crate) async fn unknown_command(ctx: &Context, msg: &Message, unknown: &str) {
    warn!("No dice command named `{}`", unknown);
    let reply = format!("**error** *expected a trigger but got* `{}`", unknown);
    if let Err(why) = send_reply(ctx, msg, &reply).await {
        error!("Could not answer unknown command `{}`: `{:?}`", unknown, why);
    }
}
