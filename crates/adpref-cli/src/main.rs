mod analyze;
mod history;
mod recommend;

use std::path::PathBuf;

use adpref_core::AppConfig;
use adpref_sentiment::{Lexicon, SentimentScorer};
use adpref_store::JsonStore;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adpref")]
#[command(about = "Ad copy sentiment analysis and preference learning")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze sentiment, style, and industry of a piece of copy
    Analyze {
        /// Ad copy to analyze
        text: String,
    },
    /// Analyze a piece of copy and store it with your rating
    Rate {
        /// Ad copy to rate
        text: String,
        /// Overall rating from 1 to 10
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        rating: u8,
    },
    /// Rate many pieces of copy from a file of `rating<TAB>text` lines
    Batch {
        /// Path to the batch file
        file: PathBuf,
    },
    /// List stored ratings
    History,
    /// Summarize rating preferences by tone, style, and wording
    Report,
    /// Find previously rated copy similar to the given text
    Similar {
        /// Ad copy to compare against the history
        text: String,
        /// Maximum number of matches (defaults to ADPREF_SIMILAR_TOP_N)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Recommend corpus copy based on highly rated history
    Recommend {
        /// Maximum number of recommendations (defaults to ADPREF_RECOMMEND_TOP_N)
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Everything a command handler needs, built once at startup.
pub(crate) struct App {
    pub config: AppConfig,
    pub scorer: SentimentScorer,
    pub store: JsonStore,
}

impl App {
    fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let taxonomy = match &config.taxonomy_path {
            Some(path) => adpref_core::load_taxonomy(path)?,
            None => adpref_core::Taxonomy::default(),
        };
        let lexicon = Lexicon::load_or_disabled(&config.lexicon_path)?;

        Ok(Self {
            scorer: SentimentScorer::new(lexicon, taxonomy),
            store: JsonStore::new(config.data_path.clone()),
            config,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = adpref_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    let app = App::from_config(config)?;

    match cli.command {
        Commands::Analyze { text } => analyze::run_analyze(&app, &text),
        Commands::Rate { text, rating } => analyze::run_rate(&app, &text, rating),
        Commands::Batch { file } => analyze::run_batch(&app, &file),
        Commands::History => history::run_history(&app),
        Commands::Report => history::run_report(&app),
        Commands::Similar { text, top } => {
            recommend::run_similar(&app, &text, top.unwrap_or(app.config.similar_top_n))
        }
        Commands::Recommend { top } => {
            recommend::run_recommend(&app, top.unwrap_or(app.config.recommend_top_n))
        }
    }
}
