use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// KNU-format sentiment lexicon (`SentiWord_info.json`).
    pub lexicon_path: PathBuf,
    /// Rated-item history (`ad_data.json`).
    pub data_path: PathBuf,
    /// Candidate copy corpus (`ad_copy_database.json`).
    pub corpus_path: PathBuf,
    /// Optional YAML override for the style/industry tables.
    pub taxonomy_path: Option<PathBuf>,
    pub recommend_top_n: usize,
    pub similar_top_n: usize,
}
