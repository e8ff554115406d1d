use adpref_core::{ConflictType, ScoredCategory};

use super::*;

fn scorer(entries: &[(&str, i32)]) -> SentimentScorer {
    SentimentScorer::new(
        Lexicon::from_entries(entries.iter().map(|(w, p)| (*w, *p))),
        Taxonomy::default(),
    )
}

fn no_conflict() -> ConflictInfo {
    detect_conflict(&[], &[])
}

/// Tokenizer that ignores the text and replays a fixed token list.
struct FixedTokens(Vec<String>);

impl Tokenizer for FixedTokens {
    fn tokenize(&self, _text: &str) -> Vec<String> {
        self.0.clone()
    }
}

#[test]
fn empty_lexicon_disables_analysis() {
    let scorer = SentimentScorer::new(Lexicon::default(), Taxonomy::default());
    assert!(!scorer.is_enabled());
    assert!(scorer.analyze("행복한 하루").is_none());
}

#[test]
fn no_matches_scores_zero_and_neutral() {
    let result = scorer(&[("행복", 2)]).analyze("아무 관계 없는 문장").unwrap();
    assert!(result.score.abs() < f64::EPSILON);
    assert!(result.positive_words.is_empty());
    assert!(result.negative_words.is_empty());
    assert_eq!(result.total_sentiment_words, 0);
    assert_eq!(result.label, SentimentLabel::Neutral);
    assert!(!result.conflict.has_conflict);
}

#[test]
fn mixed_example_is_positive_leaning() {
    let result = scorer(&[("행복", 2), ("눈물", -1)])
        .analyze("행복 눈물")
        .unwrap();
    assert!((result.score - 0.5).abs() < 1e-9);
    assert!(result.conflict.has_conflict);
    assert!((result.conflict.positive_strength - 2.0).abs() < f64::EPSILON);
    assert!((result.conflict.negative_strength - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.conflict.conflict_type, ConflictType::PositiveDominant);
    assert_eq!(result.label, SentimentLabel::MixedPositiveLeaning);
    assert_eq!(result.label.to_string(), "mixed(positive-leaning)");
}

#[test]
fn neutral_matches_count_toward_mean() {
    // (2 + 0 + 0) / 3 = 0.666..
    let result = scorer(&[("행복", 2), ("보통", 0)])
        .analyze("행복 보통 보통")
        .unwrap();
    assert!((result.score - 0.67).abs() < 1e-9);
    assert_eq!(result.neutral_count, 2);
    assert_eq!(result.total_sentiment_words, 3);
    assert_eq!(result.positive_words, vec![("행복".to_string(), 2)]);
    assert_eq!(result.label, SentimentLabel::Positive);
}

#[test]
fn repeated_words_each_count() {
    let result = scorer(&[("좋다", 1), ("최고", 2)])
        .analyze("좋다 좋다 최고")
        .unwrap();
    assert_eq!(result.positive_words.len(), 3);
    assert!((result.score - 1.33).abs() < 1e-9);
    // keywords are deduplicated even though the matches are not
    assert_eq!(
        result.keywords,
        vec![("최고".to_string(), 2), ("좋다".to_string(), 1)]
    );
}

#[test]
fn adding_one_negative_word_flips_to_mixed() {
    let lexicon = &[("행복", 2), ("사랑", 2), ("눈물", -1)];

    let before = scorer(lexicon).analyze("행복 사랑").unwrap();
    assert!(!before.conflict.has_conflict);
    assert!(!before.label.is_mixed());

    let after = scorer(lexicon).analyze("행복 사랑 눈물").unwrap();
    assert!(after.conflict.has_conflict);
    assert!(after.label.is_mixed());
}

#[test]
fn custom_tokenizer_drives_matching() {
    let tokens = FixedTokens(vec!["행복".to_string(), "눈물".to_string()]);
    let scorer = SentimentScorer::with_tokenizer(
        Lexicon::from_entries([("행복", 2), ("눈물", -1)]),
        Taxonomy::default(),
        tokens,
    );
    let result = scorer.analyze("전혀 다른 표면 문자열").unwrap();
    assert_eq!(result.total_sentiment_words, 2);
    assert_eq!(result.label, SentimentLabel::MixedPositiveLeaning);
    assert_eq!(result.token_preview, vec!["행복", "눈물"]);
}

#[test]
fn fills_styles_industries_and_pattern() {
    let result = scorer(&[("행복", 2)])
        .analyze("가족과 함께 마시는 행복한 커피!")
        .unwrap();
    assert_eq!(result.styles[0].name, "emotional");
    assert_eq!(result.industries[0], ScoredCategory::new("food_beverage", 1));
    assert!(result.language_pattern.has_exclamation);
    assert_eq!(result.language_pattern.word_count, 5);
}

#[test]
fn unmatched_taxonomy_yields_other() {
    let result = scorer(&[("행복", 2)]).analyze("xyz").unwrap();
    assert_eq!(result.styles, vec![ScoredCategory::new("other", 0)]);
    assert_eq!(result.industries, vec![ScoredCategory::new("other", 0)]);
}

#[test]
fn token_preview_is_capped() {
    let text = "가 나 다 라 마 바 사 아 자 차 카 타";
    let result = scorer(&[("행복", 2)]).analyze(text).unwrap();
    assert_eq!(result.token_preview.len(), TOKEN_PREVIEW_LEN);
    assert_eq!(result.token_preview[0], "가");
}

#[test]
fn label_thresholds() {
    let none = no_conflict();
    assert_eq!(derive_label(1.5, &none), SentimentLabel::VeryPositive);
    assert_eq!(derive_label(1.49, &none), SentimentLabel::Positive);
    assert_eq!(derive_label(0.5, &none), SentimentLabel::Positive);
    assert_eq!(derive_label(0.49, &none), SentimentLabel::Neutral);
    assert_eq!(derive_label(0.0, &none), SentimentLabel::Neutral);
    assert_eq!(derive_label(-0.49, &none), SentimentLabel::Neutral);
    assert_eq!(derive_label(-0.5, &none), SentimentLabel::Negative);
    assert_eq!(derive_label(-1.49, &none), SentimentLabel::Negative);
    assert_eq!(derive_label(-1.5, &none), SentimentLabel::VeryNegative);
}

#[test]
fn conflict_labels_ignore_score() {
    let strong = ConflictInfo {
        has_conflict: true,
        conflict_type: ConflictType::StrongMixed,
        positive_strength: 4.0,
        negative_strength: 4.0,
    };
    assert_eq!(derive_label(2.0, &strong), SentimentLabel::MixedCoexisting);

    let negative = ConflictInfo {
        conflict_type: ConflictType::NegativeDominant,
        ..strong.clone()
    };
    assert_eq!(derive_label(0.0, &negative), SentimentLabel::MixedNegativeLeaning);

    let balanced = ConflictInfo {
        conflict_type: ConflictType::Balanced,
        ..strong
    };
    assert_eq!(derive_label(-2.0, &balanced), SentimentLabel::MixedBalanced);
}

#[test]
fn round2_rounds_halves_to_even() {
    assert!((round2(0.666_666) - 0.67).abs() < 1e-12);
    assert!((round2(-1.333_333) - -1.33).abs() < 1e-12);
    assert!((round2(0.5) - 0.5).abs() < 1e-12);
    assert!((round2(0.125) - 0.12).abs() < 1e-12);
    assert!((round2(0.375) - 0.38).abs() < 1e-12);
    assert!((round2(-0.125) - -0.12).abs() < 1e-12);
}

#[test]
fn exact_eighth_mean_rounds_to_even() {
    // (1 + 0 * 7) / 8 = 0.125
    let text = format!("행복{}", " 보통".repeat(7));
    let result = scorer(&[("행복", 1), ("보통", 0)]).analyze(&text).unwrap();
    assert_eq!(result.total_sentiment_words, 8);
    assert_eq!(result.neutral_count, 7);
    assert!((result.score - 0.12).abs() < 1e-12);
}
