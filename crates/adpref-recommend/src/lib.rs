//! Similarity search and personalised recommendation over rated ad copy.
//!
//! Both operations rebuild a TF-IDF space per call over the union of the
//! reference and query texts, so IDF weights are always consistent between
//! the two sides. Nothing is cached between calls.

pub mod engine;
pub mod preferences;
pub mod tfidf;

pub use engine::{
    find_similar, recommend, try_find_similar, try_recommend, SkipReason, LIKED_RATING,
    MIN_SIMILARITY,
};
pub use preferences::{
    aggregate_preferences, category_distribution, Highlight, LanguagePreference, PreferenceReport,
    RatingGroup, ToneCorrelation,
};
pub use tfidf::{cosine_similarity, similarity_matrix, TfidfSpace};
