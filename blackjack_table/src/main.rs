mod config;

use blackjack_lib::prelude::*;
use clap::Parser;
use config::Args;
use std::io;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that end the program with a non-zero exit code.
#[derive(Debug, Error)]
enum TableError {
    #[error(transparent)]
    Game(#[from] BlackjackGameError),

    #[error("unable to serialize table: {0}")]
    Snapshot(#[from] serde_json::Error),
}

fn main() {
    // Logs go to stderr so they never interleave with the prompts on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TableError> {
    let config = config::resolve(args)?;
    info!(?config, "starting table");

    let stdin = io::stdin();
    let mut console = LineConsole::new(stdin.lock(), io::stdout());
    let mut session = GameSession::new(&config);

    session.play_game(&mut console)?;
    announce_opening_deal(&session, &mut console, config.reveal_dealer_hand);

    if args.json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())?;
        console.write_line(&snapshot);
    }

    Ok(())
}
