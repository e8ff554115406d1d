//! Mixed-sentiment detection.

use adpref_core::{ConflictInfo, ConflictType, WordPolarity};

/// How much stronger one side must be to count as dominant.
const DOMINANCE_RATIO: f64 = 1.5;

fn strength(words: &[WordPolarity]) -> f64 {
    words.iter().map(|(_, p)| f64::from(p.abs())).sum()
}

/// Classify the co-occurrence of positive and negative words.
///
/// A conflict needs at least one word on each side. Two or more on both sides
/// is `StrongMixed`; otherwise the side whose summed absolute polarity exceeds
/// 1.5x the other dominates, and anything else is `Balanced`.
#[must_use]
pub fn detect_conflict(positive_words: &[WordPolarity], negative_words: &[WordPolarity]) -> ConflictInfo {
    let pos_count = positive_words.len();
    let neg_count = negative_words.len();
    let positive_strength = strength(positive_words);
    let negative_strength = strength(negative_words);

    let has_conflict = pos_count >= 1 && neg_count >= 1;

    let conflict_type = if !has_conflict {
        ConflictType::None
    } else if pos_count >= 2 && neg_count >= 2 {
        ConflictType::StrongMixed
    } else if positive_strength > negative_strength * DOMINANCE_RATIO {
        ConflictType::PositiveDominant
    } else if negative_strength > positive_strength * DOMINANCE_RATIO {
        ConflictType::NegativeDominant
    } else {
        ConflictType::Balanced
    };

    ConflictInfo {
        has_conflict,
        conflict_type,
        positive_strength,
        negative_strength,
    }
}
