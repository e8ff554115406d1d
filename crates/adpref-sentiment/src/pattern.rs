//! Surface features of ad copy.

use std::sync::LazyLock;

use adpref_core::LanguagePattern;
use regex::Regex;

static HANGUL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣]+").expect("valid regex"));
static EMOJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ㅋㅎ\x{1F600}-\x{1F64F}]").expect("valid regex"));

/// Summarize length, punctuation and emoji usage of `text`.
///
/// `sentence_count` is the number of pieces left after splitting the trimmed
/// text on `.`, `!` and `?`; a trailing terminator leaves an empty final piece,
/// which is counted.
#[must_use]
pub fn analyze_language_pattern(text: &str) -> LanguagePattern {
    LanguagePattern {
        length: text.chars().count(),
        word_count: HANGUL_WORD_RE.find_iter(text).count(),
        has_question: text.contains('?'),
        has_exclamation: text.contains('!'),
        has_emoji: EMOJI_RE.is_match(text),
        sentence_count: text.trim().split(['.', '!', '?']).count(),
    }
}
