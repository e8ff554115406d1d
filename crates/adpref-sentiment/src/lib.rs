//! Lexicon-based sentiment, style and industry scoring for short ad copy.
//!
//! Text is tokenized, matched against a static polarity lexicon, and scored
//! into an [`adpref_core::AnalysisResult`]. Style and industry come from the
//! ordered keyword tables in [`adpref_core::Taxonomy`]. Everything here is a
//! pure function of the lexicon, the tables and the input text.

pub mod classifier;
pub mod conflict;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod pattern;
pub mod scorer;
pub mod tokenizer;

pub use classifier::{classify, classify_with_tokens};
pub use conflict::detect_conflict;
pub use error::SentimentError;
pub use keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT};
pub use lexicon::Lexicon;
pub use pattern::analyze_language_pattern;
pub use scorer::SentimentScorer;
pub use tokenizer::{Tokenizer, WordTokenizer};
