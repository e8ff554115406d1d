//! Combines lexicon matching, conflict detection and classification into one
//! [`AnalysisResult`].

use adpref_core::{AnalysisResult, ConflictInfo, ConflictType, SentimentLabel, Taxonomy, WordPolarity};

use crate::classifier::classify_with_tokens;
use crate::conflict::detect_conflict;
use crate::keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT};
use crate::lexicon::Lexicon;
use crate::pattern::analyze_language_pattern;
use crate::tokenizer::{Tokenizer, WordTokenizer};

/// Number of tokens kept in [`AnalysisResult::token_preview`].
const TOKEN_PREVIEW_LEN: usize = 10;

/// Scores ad copy against a lexicon and a style/industry taxonomy.
#[derive(Debug, Clone)]
pub struct SentimentScorer<T = WordTokenizer> {
    lexicon: Lexicon,
    taxonomy: Taxonomy,
    tokenizer: T,
}

impl SentimentScorer<WordTokenizer> {
    #[must_use]
    pub fn new(lexicon: Lexicon, taxonomy: Taxonomy) -> Self {
        Self::with_tokenizer(lexicon, taxonomy, WordTokenizer)
    }
}

impl<T: Tokenizer> SentimentScorer<T> {
    #[must_use]
    pub fn with_tokenizer(lexicon: Lexicon, taxonomy: Taxonomy, tokenizer: T) -> Self {
        Self {
            lexicon,
            taxonomy,
            tokenizer,
        }
    }

    /// `false` when the lexicon is empty and [`Self::analyze`] always returns `None`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.lexicon.is_empty()
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Analyze one piece of copy.
    ///
    /// Returns `None` when the lexicon is empty: sentiment is unavailable, which
    /// callers treat as a steady state rather than a failure.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Option<AnalysisResult> {
        if self.lexicon.is_empty() {
            return None;
        }

        let tokens = self.tokenizer.tokenize(text);

        let mut positive_words: Vec<WordPolarity> = Vec::new();
        let mut negative_words: Vec<WordPolarity> = Vec::new();
        let mut neutral_count = 0_usize;
        let mut polarity_sum = 0_i64;
        let mut matched = 0_usize;

        for token in &tokens {
            let Some(polarity) = self.lexicon.lookup(token) else {
                continue;
            };
            polarity_sum += i64::from(polarity);
            matched += 1;

            if polarity >= 1 {
                positive_words.push((token.clone(), polarity));
            } else if polarity <= -1 {
                negative_words.push((token.clone(), polarity));
            } else {
                neutral_count += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = if matched == 0 {
            0.0
        } else {
            polarity_sum as f64 / matched as f64
        };

        let conflict = detect_conflict(&positive_words, &negative_words);
        let label = derive_label(mean, &conflict);

        tracing::debug!(
            matched,
            positive = positive_words.len(),
            negative = negative_words.len(),
            label = %label,
            "analyzed ad copy"
        );

        Some(AnalysisResult {
            score: round2(mean),
            label,
            neutral_count,
            total_sentiment_words: matched,
            styles: classify_with_tokens(text, &tokens, &self.taxonomy.styles),
            industries: classify_with_tokens(text, &tokens, &self.taxonomy.industries),
            keywords: extract_keywords(&tokens, &self.lexicon, DEFAULT_KEYWORD_COUNT),
            language_pattern: analyze_language_pattern(text),
            conflict,
            positive_words,
            negative_words,
            token_preview: tokens.into_iter().take(TOKEN_PREVIEW_LEN).collect(),
        })
    }
}

/// Mixed labels come from the conflict shape; single-polarity labels from the mean.
fn derive_label(score: f64, conflict: &ConflictInfo) -> SentimentLabel {
    if conflict.has_conflict {
        return match conflict.conflict_type {
            ConflictType::StrongMixed => SentimentLabel::MixedCoexisting,
            ConflictType::PositiveDominant => SentimentLabel::MixedPositiveLeaning,
            ConflictType::NegativeDominant => SentimentLabel::MixedNegativeLeaning,
            ConflictType::Balanced | ConflictType::None => SentimentLabel::MixedBalanced,
        };
    }

    if score >= 1.5 {
        SentimentLabel::VeryPositive
    } else if score >= 0.5 {
        SentimentLabel::Positive
    } else if score <= -1.5 {
        SentimentLabel::VeryNegative
    } else if score <= -0.5 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Two-decimal rounding with exact halves going to the even neighbour.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
