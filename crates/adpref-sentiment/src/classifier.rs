//! Keyword-table classification used for both style and industry.

use adpref_core::{CategoryTable, ScoredCategory, OTHER_CATEGORY};

/// Score `text` against every category of `table`.
///
/// See [`classify_with_tokens`]; this variant matches on substrings only.
#[must_use]
pub fn classify(text: &str, table: &CategoryTable) -> Vec<ScoredCategory> {
    classify_with_tokens(text, &[], table)
}

/// Score `text` against every category of `table`.
///
/// A category's score is the number of its distinct keywords that occur as a
/// substring of `text` or equal one of `tokens`. Zero-score categories are
/// dropped and the rest are sorted by score descending; the sort is stable,
/// so equal scores keep table order. With no match at all the result is
/// exactly `[("other", 0)]`.
#[must_use]
pub fn classify_with_tokens(
    text: &str,
    tokens: &[String],
    table: &CategoryTable,
) -> Vec<ScoredCategory> {
    let mut scored: Vec<ScoredCategory> = table
        .iter()
        .filter_map(|category| {
            let hits = category
                .keywords
                .iter()
                .filter(|keyword| {
                    text.contains(keyword.as_str()) || tokens.iter().any(|t| t == *keyword)
                })
                .count();
            let score = u32::try_from(hits).unwrap_or(u32::MAX);
            (score > 0).then(|| ScoredCategory::new(category.name.clone(), score))
        })
        .collect();

    if scored.is_empty() {
        return vec![ScoredCategory::new(OTHER_CATEGORY, 0)];
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use adpref_core::Category;

    use super::*;

    fn table() -> CategoryTable {
        CategoryTable::new(vec![
            Category::new("first", ["사랑", "마음"]),
            Category::new("second", ["커피", "맛"]),
            Category::new("third", ["지금", "바로", "오늘"]),
        ])
    }

    #[test]
    fn no_match_yields_other_sentinel() {
        let result = classify("아무 관련 없는 문장", &table());
        assert_eq!(result, vec![ScoredCategory::new("other", 0)]);
    }

    #[test]
    fn counts_distinct_keywords_not_occurrences() {
        let result = classify("사랑 사랑 사랑", &table());
        assert_eq!(result, vec![ScoredCategory::new("first", 1)]);
    }

    #[test]
    fn sorts_by_score_descending() {
        let result = classify("오늘 바로 마음", &table());
        assert_eq!(
            result,
            vec![
                ScoredCategory::new("third", 2),
                ScoredCategory::new("first", 1),
            ]
        );
    }

    #[test]
    fn ties_keep_table_order() {
        let result = classify("맛있는 커피와 사랑과 마음", &table());
        assert_eq!(
            result,
            vec![
                ScoredCategory::new("first", 2),
                ScoredCategory::new("second", 2),
            ]
        );

        let reversed_text = classify("마음과 사랑, 그리고 커피 맛", &table());
        assert_eq!(reversed_text[0].name, "first");
        assert_eq!(reversed_text[1].name, "second");
    }

    #[test]
    fn exact_token_match_counts_when_not_substring() {
        // A morphological tokenizer can yield a lemma absent from the surface text.
        let tokens = vec!["사랑".to_string()];
        let result = classify_with_tokens("사랑해요", &tokens, &table());
        assert_eq!(result, vec![ScoredCategory::new("first", 1)]);

        let lemma_only = vec!["맛".to_string()];
        let result = classify_with_tokens("달콤한", &lemma_only, &table());
        assert_eq!(result, vec![ScoredCategory::new("second", 1)]);
    }

    #[test]
    fn substring_and_token_match_on_same_keyword_count_once() {
        let tokens = vec!["커피".to_string()];
        let result = classify_with_tokens("커피", &tokens, &table());
        assert_eq!(result, vec![ScoredCategory::new("second", 1)]);
    }

    #[test]
    fn default_style_table_classifies_emotional_copy() {
        let styles = CategoryTable::default_styles();
        let result = classify("가족과 함께하는 행복한 순간", &styles);
        assert_eq!(result[0], ScoredCategory::new("emotional", 4));
    }

    #[test]
    fn empty_table_yields_other() {
        let result = classify("무엇이든", &CategoryTable::default());
        assert_eq!(result, vec![ScoredCategory::new("other", 0)]);
    }
}
