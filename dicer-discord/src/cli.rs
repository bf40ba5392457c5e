use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use dicer_lib::dice::limits::MAX_DICE_AMOUNT;
use dicer_lib::dice::limits::MAX_DICE_SIDES;
use dicer_lib::dice::Limits;

/// Command prefix unless overridden
pub const DEFAULT_PREFIX: &str = "!";

const DICER_AUTHOR: &str = crate_authors!();
const DICER_VERSION: &str = crate_version!();
const DICER_ABOUT: &str = crate_description!();
const DICER_FLAG_D_SHORT: char = 'd';
const DICER_FLAG_D_HELP: &str = "Enable Debug logging";
const DICER_FLAG_MAX_DICE_HELP: &str = "Most dice a single token may throw";
const DICER_FLAG_MAX_SIDES_HELP: &str = "Most sides a die may have";
const DICER_FLAG_TOKEN_HELP: &str = "Discord bot token";
const DICER_FLAG_PREFIX_HELP: &str = "Prefix the bot commands start with";

#[derive(Parser)]
#[command(author = DICER_AUTHOR, version = DICER_VERSION, about = DICER_ABOUT)]
pub struct Args {
    #[arg(short = DICER_FLAG_D_SHORT, long, help = DICER_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(long, env = "DICER_MAX_DICE", default_value_t = MAX_DICE_AMOUNT, help = DICER_FLAG_MAX_DICE_HELP)]
    pub max_dice: u64,
    #[arg(long, env = "DICER_MAX_SIDES", default_value_t = MAX_DICE_SIDES, help = DICER_FLAG_MAX_SIDES_HELP)]
    pub max_sides: u64,
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true, help = DICER_FLAG_TOKEN_HELP)]
    pub token: String,
    #[arg(long, env = "DICER_PREFIX", default_value = DEFAULT_PREFIX, help = DICER_FLAG_PREFIX_HELP)]
    pub prefix: String,
}

impl Args {
    pub fn limits(&self) -> Limits {
        Limits {
            max_dice: self.max_dice,
            max_sides: self.max_sides,
        }
    }
}
