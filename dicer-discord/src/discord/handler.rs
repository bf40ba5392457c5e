use serenity::async_trait;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::prelude::Context;
use serenity::prelude::EventHandler;
use tracing::debug;
use tracing::info;

pub(crate) struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        info!(
            "Connected as `{}` to `{}` guild(s)",
            ready.user.name,
            ready.guilds.len()
        );
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        debug!("Resumed");
    }
}
