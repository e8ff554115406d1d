//! Preference report over the stored rating history.
//!
//! Groups rated items by the analysis attached at rating time (sentiment
//! label, primary style, surface features, keywords) and averages the user's
//! ratings per group.

use adpref_core::{LanguagePattern, RatedItem, Recommendation};
use serde::Serialize;

const SHORT_COPY_CHARS: usize = 20;
const LONG_COPY_CHARS: usize = 50;
/// Keyword and tone-correlation insights need at least this many rated items.
const INSIGHT_MIN_ITEMS: usize = 5;
const KEYWORDS_PER_ITEM: usize = 2;
const KEYWORD_MIN_ITEMS: usize = 2;
const EFFECTIVE_KEYWORD_LIMIT: usize = 3;
const CORRELATION_MIN_SIDE: usize = 2;
const CORRELATION_SCORE: f64 = 0.5;

/// Average rating of the items sharing `key`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingGroup {
    pub key: String,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LanguagePreference {
    pub short: Option<RatingGroup>,
    pub long: Option<RatingGroup>,
    pub exclamation: Option<RatingGroup>,
    pub question: Option<RatingGroup>,
}

/// Ratings of clearly positive copy against clearly negative copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneCorrelation {
    pub positive: RatingGroup,
    pub negative: RatingGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub text: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceReport {
    pub item_count: usize,
    pub average_rating: f64,
    /// Sentiment labels, best-rated first.
    pub tones: Vec<RatingGroup>,
    /// Primary styles, best-rated first.
    pub styles: Vec<RatingGroup>,
    /// All mixed-sentiment items taken together.
    pub mixed: Option<RatingGroup>,
    pub language: LanguagePreference,
    pub effective_keywords: Vec<RatingGroup>,
    pub tone_correlation: Option<ToneCorrelation>,
    pub best: Highlight,
    /// Only reported once there are at least three items.
    pub worst: Option<Highlight>,
}

impl PreferenceReport {
    #[must_use]
    pub fn favourite_tone(&self) -> Option<&RatingGroup> {
        self.tones.first()
    }

    #[must_use]
    pub fn favourite_style(&self) -> Option<&RatingGroup> {
        self.styles.first()
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(ratings: &[u8]) -> f64 {
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    f64::from(sum) / ratings.len() as f64
}

fn group(key: &str, ratings: &[u8]) -> Option<RatingGroup> {
    (!ratings.is_empty()).then(|| RatingGroup {
        key: key.to_string(),
        average: average(ratings),
        count: ratings.len(),
    })
}

/// Group `(key, rating)` pairs in first-seen order, then stable-sort by average descending.
fn group_by_key<I>(pairs: I) -> Vec<RatingGroup>
where
    I: IntoIterator<Item = (String, u8)>,
{
    let mut keys: Vec<String> = Vec::new();
    let mut ratings: Vec<Vec<u8>> = Vec::new();

    for (key, rating) in pairs {
        if let Some(pos) = keys.iter().position(|k| *k == key) {
            ratings[pos].push(rating);
        } else {
            keys.push(key);
            ratings.push(vec![rating]);
        }
    }

    let mut groups: Vec<RatingGroup> = keys
        .into_iter()
        .zip(ratings)
        .map(|(key, ratings)| RatingGroup {
            average: average(&ratings),
            count: ratings.len(),
            key,
        })
        .collect();
    groups.sort_by(|a, b| b.average.total_cmp(&a.average));
    groups
}

fn pattern_ratings<F>(items: &[&RatedItem], predicate: F) -> Vec<u8>
where
    F: Fn(&LanguagePattern) -> bool,
{
    ratings_where(items, |item| {
        item.analysis
            .as_ref()
            .is_some_and(|a| predicate(&a.language_pattern))
    })
}

fn ratings_where<F>(items: &[&RatedItem], predicate: F) -> Vec<u8>
where
    F: Fn(&RatedItem) -> bool,
{
    items
        .iter()
        .filter(|item| predicate(**item))
        .map(|item| item.rating)
        .collect()
}

/// Build the preference report for `items`. Returns `None` for an empty history.
#[must_use]
pub fn aggregate_preferences(items: &[RatedItem]) -> Option<PreferenceReport> {
    let first = items.first()?;
    let all_ratings: Vec<u8> = items.iter().map(|item| item.rating).collect();

    let analysed: Vec<&RatedItem> = items.iter().filter(|i| i.analysis.is_some()).collect();
    let tones = group_by_key(analysed.iter().filter_map(|item| {
        item.analysis
            .as_ref()
            .map(|a| (a.label.to_string(), item.rating))
    }));

    let styles = group_by_key(analysed.iter().filter_map(|item| {
        item.analysis
            .as_ref()
            .and_then(|a| a.primary_style())
            .map(|style| (style.name.clone(), item.rating))
    }));

    let mixed = group(
        "mixed",
        &ratings_where(&analysed, |item| {
            item.analysis.as_ref().is_some_and(|a| a.label.is_mixed())
        }),
    );

    let language = LanguagePreference {
        short: group("short", &pattern_ratings(&analysed, |p| p.length < SHORT_COPY_CHARS)),
        long: group("long", &pattern_ratings(&analysed, |p| p.length > LONG_COPY_CHARS)),
        exclamation: group("exclamation", &pattern_ratings(&analysed, |p| p.has_exclamation)),
        question: group("question", &pattern_ratings(&analysed, |p| p.has_question)),
    };

    let (effective_keywords, tone_correlation) = if items.len() >= INSIGHT_MIN_ITEMS {
        (repeated_keywords(&analysed), correlate_tone(&analysed))
    } else {
        (Vec::new(), None)
    };

    let mut best = first;
    let mut worst = first;
    for item in items {
        if item.rating > best.rating {
            best = item;
        }
        if item.rating <= worst.rating {
            worst = item;
        }
    }

    Some(PreferenceReport {
        item_count: items.len(),
        average_rating: average(&all_ratings),
        tones,
        styles,
        mixed,
        language,
        effective_keywords,
        tone_correlation,
        best: Highlight {
            text: best.text.clone(),
            rating: best.rating,
        },
        worst: (items.len() >= 3).then(|| Highlight {
            text: worst.text.clone(),
            rating: worst.rating,
        }),
    })
}

/// Words from each item's top keywords that recur across items, best-rated first.
fn repeated_keywords(analysed: &[&RatedItem]) -> Vec<RatingGroup> {
    let pairs = analysed.iter().flat_map(|&item| {
        item.analysis.iter().flat_map(move |a| {
            a.keywords
                .iter()
                .take(KEYWORDS_PER_ITEM)
                .map(move |(word, _)| (word.clone(), item.rating))
        })
    });

    let mut groups: Vec<RatingGroup> = group_by_key(pairs)
        .into_iter()
        .filter(|g| g.count >= KEYWORD_MIN_ITEMS)
        .collect();
    groups.truncate(EFFECTIVE_KEYWORD_LIMIT);
    groups
}

fn correlate_tone(analysed: &[&RatedItem]) -> Option<ToneCorrelation> {
    let positive = ratings_where(analysed, |item| {
        item.analysis.as_ref().is_some_and(|a| a.score > CORRELATION_SCORE)
    });
    let negative = ratings_where(analysed, |item| {
        item.analysis.as_ref().is_some_and(|a| a.score < -CORRELATION_SCORE)
    });

    if positive.len() < CORRELATION_MIN_SIDE || negative.len() < CORRELATION_MIN_SIDE {
        return None;
    }

    Some(ToneCorrelation {
        positive: group("positive", &positive)?,
        negative: group("negative", &negative)?,
    })
}

/// Count recommendations per candidate category, most frequent first.
#[must_use]
pub fn category_distribution(recommendations: &[Recommendation]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for rec in recommendations {
        let category = &rec.candidate.category;
        if let Some(entry) = counts.iter_mut().find(|(c, _)| c == category) {
            entry.1 += 1;
        } else {
            counts.push((category.clone(), 1));
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;
