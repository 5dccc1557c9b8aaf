//! Spaceman - CLI
//!
//! Guess the secret word one letter at a time before the Spaceman is expelled from the airlock.

use anyhow::{Context, Result};
use clap::Parser;
use spaceman::{
    game::{Console, ReplayPolicy, Session, SessionConfig},
    wordlists::{RandomWordSource, WordOrigin},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spaceman",
    about = "Guess the secret word before the Spaceman is expelled from the airlock",
    version,
    author
)]
struct Cli {
    /// Word list file (whitespace separated words); defaults to the built-in list
    #[arg(short = 'w', long)]
    words: Option<PathBuf>,

    /// Seed for picking secret words, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Keep asking "play again?" until the answer is Y or N
    #[arg(long)]
    keep_asking: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let origin = cli.words.map_or(WordOrigin::Embedded, WordOrigin::File);
    let source = match cli.seed {
        Some(seed) => RandomWordSource::seeded(origin, seed),
        None => RandomWordSource::from_os_rng(origin),
    };

    let config = SessionConfig {
        replay: if cli.keep_asking {
            ReplayPolicy::UntilValid
        } else {
            ReplayPolicy::SingleRetry
        },
    };

    let console = Console::new(io::stdin().lock(), io::stdout());
    let summary = Session::new(source, console, config)
        .run()
        .context("Spaceman could not continue")?;

    log::debug!("Played {} rounds", summary.rounds);
    Ok(())
}
