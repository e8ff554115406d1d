//! Tokenizer seam.
//!
//! The scorer only needs an ordered list of token strings. [`WordTokenizer`]
//! splits on Hangul and Latin runs; a morphological analyzer can be plugged
//! in by implementing [`Tokenizer`].

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣]+|[a-zA-Z]+").expect("valid regex"));

pub trait Tokenizer {
    /// Split `text` into tokens, preserving their order of appearance.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}

/// Runs of Hangul syllables or ASCII letters. Digits, punctuation and jamo are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hangul_and_latin_runs() {
        let tokens = WordTokenizer.tokenize("행복한 AI 하루!");
        assert_eq!(tokens, vec!["행복한", "AI", "하루"]);
    }

    #[test]
    fn mixed_script_word_splits_at_boundary() {
        let tokens = WordTokenizer.tokenize("AI스피커");
        assert_eq!(tokens, vec!["AI", "스피커"]);
    }

    #[test]
    fn drops_digits_punctuation_and_jamo() {
        let tokens = WordTokenizer.tokenize("ㅋㅋㅋ 2024, ...");
        assert!(tokens.is_empty());
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(WordTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn boxed_tokenizer_delegates() {
        let boxed: Box<dyn Tokenizer> = Box::new(WordTokenizer);
        assert_eq!(boxed.tokenize("사랑 해"), vec!["사랑", "해"]);
    }
}
