use crate::discord::post;
use crate::discord::utils::get_settings;
use crate::discord::utils::get_user_name;
use crate::discord::utils::send_post;
use crate::discord::utils::send_reply;
use dicer_lib::dice::Limits;
use dicer_lib::error::Result;
use dicer_lib::help;
use dicer_lib::roll::Outcome;
use dicer_lib::roller::Roller;
use serenity::framework::standard::macros::command;
use serenity::framework::standard::macros::group;
use serenity::framework::standard::Args;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::debug;
use tracing::warn;

#[group]
#[description = "Dice rolling group"]
#[commands(roll, close, roll_and_close)]
struct Dice;

#[command]
#[aliases("r")]
#[description = "Roll one or more dice"]
#[usage = "[QUERY]"]
async fn roll(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    roll_query(ctx, msg, args.rest()).await?;
    Ok(())
}

#[command]
#[description = "Close the current round"]
async fn close(ctx: &Context, msg: &Message) -> CommandResult {
    close_round(ctx, msg).await
}

#[command("rollandclose")]
#[description = "Roll one or more dice and close the current round"]
#[usage = "[QUERY]"]
async fn roll_and_close(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    if roll_query(ctx, msg, args.rest()).await? {
        close_round(ctx, msg).await?;
    }
    Ok(())
}

/// Validate and roll without awaiting, the shared generator is locked meanwhile
fn solve(query: &str, limits: &Limits) -> Result<(Roller, Outcome)> {
    let roller = Roller::with_limits(query, limits)?;
    let outcome = roller.roll()?;
    Ok((roller, outcome))
}

/// Answer a roll query, `true` when dice were posted
async fn roll_query(ctx: &Context, msg: &Message, query: &str) -> CommandResult<bool> {
    debug!("Received `{:?}`", msg.content);
    let settings = get_settings(ctx).await;
    if help::is_help(query) {
        send_reply(ctx, msg, &post::help(&settings.prefix)).await?;
        return Ok(false);
    }
    match solve(query, &settings.limits) {
        Ok((roller, outcome)) => {
            debug!("Rolled `{}` for `{}`", roller.as_str(), outcome.get_total());
            let name = get_user_name(ctx, msg).await;
            send_post(ctx, msg, &post::rolled(&name, roller.as_str(), &outcome)).await?;
            Ok(true)
        }
        Err(error) => {
            warn!("Rejected `{}`: {}", query.trim(), error);
            send_reply(ctx, msg, &post::failed(&error, &settings.prefix)).await?;
            Ok(false)
        }
    }
}

async fn close_round(ctx: &Context, msg: &Message) -> CommandResult {
    let name = get_user_name(ctx, msg).await;
    send_post(ctx, msg, &post::closed(&name)).await?;
    Ok(())
}
