//! Output contract of the sentiment scorer.
//!
//! An [`AnalysisResult`] is produced fresh for every analyzed text and never
//! mutated afterwards. It is stored alongside each [`crate::RatedItem`] and
//! consumed by the preference report.
//!
//! Deserialization also accepts the layout of older history files: Korean
//! labels and conflict types, `[name, score]` category pairs, a null
//! `conflict_type`, and `morphemes` in place of `token_preview`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::taxonomy::canonical_category_name;

/// A lexicon word paired with its polarity.
pub type WordPolarity = (String, i32);

/// A taxonomy category together with the number of distinct keywords that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCategory")]
pub struct ScoredCategory {
    pub name: String,
    pub score: u32,
}

impl ScoredCategory {
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCategory {
    Named { name: String, score: u32 },
    Pair(String, u32),
}

impl From<StoredCategory> for ScoredCategory {
    fn from(stored: StoredCategory) -> Self {
        let (name, score) = match stored {
            StoredCategory::Named { name, score } | StoredCategory::Pair(name, score) => {
                (name, score)
            }
        };
        Self::new(canonical_category_name(name), score)
    }
}

/// Overall sentiment label derived from the mean score and the conflict shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "very positive", alias = "매우 긍정")]
    VeryPositive,
    #[serde(rename = "positive", alias = "긍정")]
    Positive,
    #[serde(rename = "neutral", alias = "중립")]
    Neutral,
    #[serde(rename = "negative", alias = "부정")]
    Negative,
    #[serde(rename = "very negative", alias = "매우 부정")]
    VeryNegative,
    #[serde(rename = "mixed(coexisting)", alias = "혼합(양립)")]
    MixedCoexisting,
    #[serde(rename = "mixed(positive-leaning)", alias = "혼합(긍정우세)")]
    MixedPositiveLeaning,
    #[serde(rename = "mixed(negative-leaning)", alias = "혼합(부정우세)")]
    MixedNegativeLeaning,
    #[serde(rename = "mixed(balanced)", alias = "혼합(균형)")]
    MixedBalanced,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "very positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very negative",
            SentimentLabel::MixedCoexisting => "mixed(coexisting)",
            SentimentLabel::MixedPositiveLeaning => "mixed(positive-leaning)",
            SentimentLabel::MixedNegativeLeaning => "mixed(negative-leaning)",
            SentimentLabel::MixedBalanced => "mixed(balanced)",
        }
    }

    /// `true` for the four labels produced when positive and negative words co-occur.
    #[must_use]
    pub fn is_mixed(self) -> bool {
        matches!(
            self,
            SentimentLabel::MixedCoexisting
                | SentimentLabel::MixedPositiveLeaning
                | SentimentLabel::MixedNegativeLeaning
                | SentimentLabel::MixedBalanced
        )
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a positive/negative co-occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    None,
    #[serde(alias = "강한혼합")]
    StrongMixed,
    #[serde(alias = "긍정우세혼합")]
    PositiveDominant,
    #[serde(alias = "부정우세혼합")]
    NegativeDominant,
    #[serde(alias = "균형혼합")]
    Balanced,
}

/// Older files write `null` when there is no conflict.
fn conflict_type_or_none<'de, D>(deserializer: D) -> Result<ConflictType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ConflictType>::deserialize(deserializer)?.unwrap_or(ConflictType::None))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictInfo {
    pub has_conflict: bool,
    #[serde(deserialize_with = "conflict_type_or_none")]
    pub conflict_type: ConflictType,
    /// Sum of absolute polarities over the positive words.
    pub positive_strength: f64,
    /// Sum of absolute polarities over the negative words.
    pub negative_strength: f64,
}

/// Surface features of the copy, independent of the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePattern {
    /// Length in characters.
    pub length: usize,
    /// Number of Hangul word runs.
    pub word_count: usize,
    pub has_question: bool,
    pub has_exclamation: bool,
    pub has_emoji: bool,
    pub sentence_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Mean polarity of every lexicon-matched token, rounded to two decimals.
    pub score: f64,
    #[serde(rename = "sentiment_label")]
    pub label: SentimentLabel,
    pub positive_words: Vec<WordPolarity>,
    pub negative_words: Vec<WordPolarity>,
    /// Lexicon matches with polarity zero. Counted, never listed.
    pub neutral_count: usize,
    pub total_sentiment_words: usize,
    #[serde(rename = "ad_styles")]
    pub styles: Vec<ScoredCategory>,
    pub industries: Vec<ScoredCategory>,
    pub keywords: Vec<WordPolarity>,
    pub language_pattern: LanguagePattern,
    #[serde(rename = "sentiment_conflict")]
    pub conflict: ConflictInfo,
    /// The first few tokens produced by the tokenizer.
    #[serde(default, alias = "morphemes")]
    pub token_preview: Vec<String>,
}

impl AnalysisResult {
    /// The highest-ranked style, which is `other` when nothing matched.
    #[must_use]
    pub fn primary_style(&self) -> Option<&ScoredCategory> {
        self.styles.first()
    }

    #[must_use]
    pub fn primary_industry(&self) -> Option<&ScoredCategory> {
        self.industries.first()
    }
}
