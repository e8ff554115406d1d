use std::collections::HashSet;

use adpref_core::WordPolarity;

use crate::lexicon::Lexicon;

pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Pick the lexicon words that best characterize a text.
///
/// A token qualifies when it is in the lexicon, is at least two characters
/// long and has `|polarity| >= 1`. Each word appears once, at the position of
/// its first occurrence. The result is stable-sorted by `|polarity|`
/// descending and truncated to `top_n`.
#[must_use]
pub fn extract_keywords(tokens: &[String], lexicon: &Lexicon, top_n: usize) -> Vec<WordPolarity> {
    let mut seen = HashSet::new();
    let mut keywords: Vec<WordPolarity> = Vec::new();

    for token in tokens {
        if token.chars().count() < 2 {
            continue;
        }
        let Some(polarity) = lexicon.lookup(token) else {
            continue;
        };
        if polarity.abs() < 1 {
            continue;
        }
        if seen.insert(token.as_str()) {
            keywords.push((token.clone(), polarity));
        }
    }

    keywords.sort_by(|a, b| b.1.abs().cmp(&a.1.abs()));
    keywords.truncate(top_n);
    keywords
}
