//! Shared data model and configuration for the ad-copy preference analyzer.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod items;
pub mod storage;
pub mod taxonomy;

use thiserror::Error;

pub use analysis::{
    AnalysisResult, ConflictInfo, ConflictType, LanguagePattern, ScoredCategory, SentimentLabel,
    WordPolarity,
};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use items::{CandidateCopy, RatedItem, Recommendation, MAX_RATING, MIN_RATING};
pub use storage::Storage;
pub use taxonomy::{
    canonical_category_name, load_taxonomy, Category, CategoryTable, Taxonomy, OTHER_CATEGORY,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid rating {0}; must be between 1 and 10")]
    InvalidRating(u8),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read taxonomy file {path}: {source}")]
    TaxonomyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse taxonomy file: {0}")]
    TaxonomyFileParse(#[from] serde_yaml::Error),

    #[error("taxonomy validation failed: {0}")]
    Validation(String),
}
