use clap::Parser;
use tracing::debug;
use tracing::Level;

mod cli;
mod discord;

#[tokio::main]
#[tracing::instrument]
async fn main() {
    // `.env` first so clap can read the variables it defines
    let dotenv = dotenv::dotenv();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if dotenv.is_err() {
        debug!("No `.env` file, reading the environment only");
    }

    discord::run(args).await;
}
