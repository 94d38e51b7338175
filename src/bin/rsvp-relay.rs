use clap::arg;
use clap::command;
use clap::{Parser, Subcommand};
use rsvp_relay::rsvp::RsvpRelay;
use rsvp_relay::server;
use rsvp_relay::utils::config_loader;
use rsvp_relay::utils::logging;
use anyhow::Result;
use rsvp_relay::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "rsvp-relay.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the RSVP submission endpoint (default)
    Serve,
    /// Mint one access token with the configured credential and print it
    Token,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level.to_owned()).await?;

    // -------------------------------
    // 2. Build relay (credential, minter, sheets client)
    // -------------------------------

    let relay = RsvpRelay::from_config(&service_config)?;

    match args.command.unwrap_or(Command::Serve) {
        // -------------------------------
        // 3a. One-shot token mint
        // -------------------------------
        Command::Token => {
            let oauth = relay.oauth();
            let token = relay
                .minter()
                .mint(relay.credential(), &oauth.scope, oauth.audience())
                .await?;
            println!("{}", token.as_str());
        }

        // -------------------------------
        // 3b. Start http server
        // -------------------------------
        Command::Serve => {
            info!("Service starting...");
            server::server::start(&service_config.settings, relay).await?;
        }
    }

    Ok(())
}
