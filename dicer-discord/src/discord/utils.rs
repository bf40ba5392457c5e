use super::Settings;
use super::SettingsContainer;
use serenity::model::prelude::Message;
use serenity::prelude::Context;

/// Answer the author directly, used for help and errors
#[inline]
pub async fn send_reply(
    ctx: &Context,
    msg: &Message,
    reply: &str,
) -> Result<Message, serenity::Error> {
    msg.reply_ping(ctx, reply).await
}

/// Post to the channel the command came from, used for rolls and announcements
#[inline]
pub async fn send_post(ctx: &Context, msg: &Message, post: &str) -> Result<Message, serenity::Error> {
    msg.channel_id.say(&ctx.http, post).await
}

/// Guild nickname when there is one, user name otherwise
pub async fn get_user_name(ctx: &Context, msg: &Message) -> String {
    match msg.guild_id {
        Some(id) => msg
            .author
            .nick_in(ctx, id)
            .await
            .unwrap_or_else(|| msg.author.name.to_owned()),
        None => msg.author.name.to_owned(),
    }
}

pub async fn get_settings(ctx: &Context) -> Settings {
    let data = ctx.data.read().await;
    data.get::<SettingsContainer>().cloned().unwrap_or_default()
}
