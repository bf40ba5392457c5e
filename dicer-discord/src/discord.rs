mod command;
mod handler;
mod hooks;
mod post;
mod utils;

use crate::cli::Args;
use crate::cli::DEFAULT_PREFIX;
use command::*;
use dicer_lib::dice::Limits;
use handler::Handler;
use hooks::*;
use serenity::framework::standard::StandardFramework;
use serenity::prelude::GatewayIntents;
use serenity::prelude::TypeMapKey;
use serenity::Client;
use tracing::info;
use tracing_unwrap::ResultExt;

/// Run-time settings shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    pub prefix: String,
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prefix: DEFAULT_PREFIX.to_owned(),
            limits: Limits::default(),
        }
    }
}

pub struct SettingsContainer;

impl TypeMapKey for SettingsContainer {
    type Value = Settings;
}

/// Command framework answering the dice commands behind `prefix`
fn framework(prefix: &str) -> StandardFramework {
    StandardFramework::new()
        .configure(|c| c.prefix(prefix).case_insensitivity(true))
        .before(before)
        .after(after)
        .unrecognised_command(unknown_command)
        .group(&roll::DICE_GROUP)
}

pub async fn run(args: Args) {
    let settings = Settings {
        prefix: args.prefix.clone(),
        limits: args.limits(),
    };
    info!(
        "Listening on prefix `{}`, rolling at most `{}` dice of `{}` sides per token",
        settings.prefix, settings.limits.max_dice, settings.limits.max_sides
    );

    let framework = framework(&settings.prefix);

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&args.token, intents)
        .framework(framework)
        .event_handler(Handler)
        .await
        .expect_or_log("Error creating client");

    {
        let mut data = client.data.write().await;
        data.insert::<SettingsContainer>(settings);
    }

    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect_or_log("Could not register Ctrl+C handler");
        shard_manager.lock().await.shutdown_all().await;
    });

    client.start().await.expect_or_log("Client error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_builds_test() {
        let _ = framework(DEFAULT_PREFIX);
        let _ = framework("?");
    }

    #[test]
    fn default_settings_test() {
        let settings = Settings::default();
        assert_eq!("!", settings.prefix);
        assert_eq!(Limits::default(), settings.limits);
    }
}
