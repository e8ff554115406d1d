use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid polarity {value:?} for word '{word}'")]
    InvalidPolarity { word: String, value: String },
}
