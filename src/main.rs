//! Broaden CLI entry point

use broaden::cli::{Cli, Commands};
use broaden::{terms, Enricher, LexiconClient};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("BROADEN_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich { query, lexicon_url } => {
            let client = match lexicon_url {
                Some(url) => LexiconClient::new(&url),
                None => LexiconClient::from_env(),
            };
            let enricher = Enricher::new(client);
            println!("{}", enricher.enrich(&query).await);
        }
        Commands::Clean { name } => {
            println!("{}", terms::clean(&name));
        }
    }
}
