use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "broaden")]
#[command(author, version)]
#[command(about = "Expand a search query into a boolean expression of synonyms")]
#[command(after_help = "Examples:
  broaden enrich \"hybrid engine control\"      Expand a query
  broaden enrich --lexicon-url http://host:5000 \"fuel cell\"
  broaden clean \"Acme Corporation Ltd\"        Strip legal suffixes")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a free-text query into an AND/OR boolean expression
    Enrich {
        /// Raw search query
        query: String,

        /// Base URL of the lemma/synonym service
        #[arg(long)]
        lexicon_url: Option<String>,
    },

    /// Clean an organization name
    Clean {
        /// Raw organization name
        name: String,
    },
}
