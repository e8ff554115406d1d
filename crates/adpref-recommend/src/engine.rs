//! History-based similarity search and corpus recommendation.

use adpref_core::{CandidateCopy, RatedItem, Recommendation};
use thiserror::Error;

use crate::tfidf::{cosine_similarity, similarity_matrix, TfidfSpace};

/// Results below this cosine similarity are dropped.
pub const MIN_SIMILARITY: f64 = 0.1;
/// Ratings at or above this value count as "liked".
pub const LIKED_RATING: u8 = 7;

const MIN_HISTORY_FOR_SIMILAR: usize = 2;
const MIN_HISTORY_FOR_RECOMMEND: usize = 3;

/// Why a similarity or recommendation request produced no results.
///
/// These are expected states of a young history or an empty corpus, not
/// failures; retrying with the same input gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("the candidate corpus is empty")]
    EmptyCorpus,

    #[error("need at least {need} rated items, have {have}")]
    InsufficientHistory { have: usize, need: usize },

    #[error("no items are rated 7 or higher")]
    NoLikedItems,

    #[error("the texts share no indexable terms")]
    EmptyVocabulary,
}

/// Keep scores at or above [`MIN_SIMILARITY`], stable-sort descending, cut to `top_n`.
fn rank(scores: impl IntoIterator<Item = (usize, f64)>, top_n: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores
        .into_iter()
        .filter(|(_, similarity)| *similarity >= MIN_SIMILARITY)
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(top_n);
    ranked
}

/// Find previously rated items whose text resembles `target_text`.
///
/// # Errors
///
/// Returns [`SkipReason::InsufficientHistory`] with fewer than two rated
/// items and [`SkipReason::EmptyVocabulary`] when no text yields a term.
pub fn try_find_similar<'a>(
    target_text: &str,
    history: &'a [RatedItem],
    top_n: usize,
) -> Result<Vec<(&'a RatedItem, f64)>, SkipReason> {
    if history.len() < MIN_HISTORY_FOR_SIMILAR {
        return Err(SkipReason::InsufficientHistory {
            have: history.len(),
            need: MIN_HISTORY_FOR_SIMILAR,
        });
    }

    let references: Vec<&str> = history.iter().map(|item| item.text.as_str()).collect();
    let matrix =
        similarity_matrix(&references, &[target_text]).ok_or(SkipReason::EmptyVocabulary)?;
    let scores = matrix.into_iter().next().unwrap_or_default();

    Ok(rank(scores.into_iter().enumerate(), top_n)
        .into_iter()
        .map(|(i, similarity)| (&history[i], similarity))
        .collect())
}

/// [`try_find_similar`] with every skip reason collapsed to an empty list.
#[must_use]
pub fn find_similar<'a>(
    target_text: &str,
    history: &'a [RatedItem],
    top_n: usize,
) -> Vec<(&'a RatedItem, f64)> {
    try_find_similar(target_text, history, top_n).unwrap_or_else(|reason| {
        tracing::debug!(%reason, "similar-item search skipped");
        Vec::new()
    })
}

/// Rank `corpus` by similarity to the user's liked items.
///
/// The user profile is the element-wise mean of the TF-IDF vectors of every
/// item rated [`LIKED_RATING`] or higher, computed in one space together with
/// the corpus texts. Each recommendation carries `"<category> style"` as its
/// reason.
///
/// # Errors
///
/// Returns the [`SkipReason`] for an empty corpus, fewer than three rated
/// items, no liked item, or an empty joint vocabulary.
pub fn try_recommend(
    history: &[RatedItem],
    corpus: &[CandidateCopy],
    top_n: usize,
) -> Result<Vec<Recommendation>, SkipReason> {
    if corpus.is_empty() {
        return Err(SkipReason::EmptyCorpus);
    }
    if history.len() < MIN_HISTORY_FOR_RECOMMEND {
        return Err(SkipReason::InsufficientHistory {
            have: history.len(),
            need: MIN_HISTORY_FOR_RECOMMEND,
        });
    }

    let liked: Vec<&str> = history
        .iter()
        .filter(|item| item.rating >= LIKED_RATING)
        .map(|item| item.text.as_str())
        .collect();
    if liked.is_empty() {
        return Err(SkipReason::NoLikedItems);
    }

    let documents: Vec<&str> = liked
        .iter()
        .copied()
        .chain(corpus.iter().map(|copy| copy.text.as_str()))
        .collect();
    let space = TfidfSpace::fit(&documents).ok_or(SkipReason::EmptyVocabulary)?;

    let profile = space.mean_vector(0..liked.len());
    let scores = space.vectors()[liked.len()..]
        .iter()
        .enumerate()
        .map(|(i, vector)| (i, cosine_similarity(&profile, vector)));

    let recommendations: Vec<Recommendation> = rank(scores, top_n)
        .into_iter()
        .map(|(i, similarity)| {
            let candidate = corpus[i].clone();
            let reason = format!("{} style", candidate.category);
            Recommendation {
                candidate,
                similarity,
                reason,
            }
        })
        .collect();

    tracing::debug!(
        liked = liked.len(),
        corpus = corpus.len(),
        returned = recommendations.len(),
        "computed recommendations"
    );

    Ok(recommendations)
}

/// [`try_recommend`] with every skip reason collapsed to an empty list.
#[must_use]
pub fn recommend(
    history: &[RatedItem],
    corpus: &[CandidateCopy],
    top_n: usize,
) -> Vec<Recommendation> {
    try_recommend(history, corpus, top_n).unwrap_or_else(|reason| {
        tracing::debug!(%reason, "recommendation skipped");
        Vec::new()
    })
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
