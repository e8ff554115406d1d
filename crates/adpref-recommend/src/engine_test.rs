use super::*;

fn item(text: &str, rating: u8) -> RatedItem {
    RatedItem::new(text, rating, None).expect("valid rating")
}

fn copy(text: &str, brand: &str, category: &str) -> CandidateCopy {
    CandidateCopy {
        text: text.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
    }
}

fn sample_corpus() -> Vec<CandidateCopy> {
    vec![
        copy("든든한 자동차 보험", "B", "finance"),
        copy("행복한 하루", "A", "emotional"),
        copy("새로운 스마트 기술", "C", "informative"),
    ]
}

#[test]
fn rank_filters_sorts_and_truncates() {
    let ranked = rank(vec![(0, 0.05), (1, 0.4), (2, 0.9), (3, 0.4)], 2);
    assert_eq!(ranked, vec![(2, 0.9), (1, 0.4)]);
}

#[test]
fn rank_keeps_input_order_on_ties() {
    let ranked = rank(vec![(0, 0.3), (1, 0.5), (2, 0.3)], 10);
    assert_eq!(ranked, vec![(1, 0.5), (0, 0.3), (2, 0.3)]);
}

#[test]
fn rank_threshold_is_inclusive() {
    let ranked = rank(vec![(0, MIN_SIMILARITY)], 1);
    assert_eq!(ranked.len(), 1);
}

#[test]
fn recommend_puts_identical_copy_first() {
    let history = vec![
        item("행복한 하루", 9),
        item("주말 특가 세일", 2),
        item("오래된 낡은 창고", 3),
    ];
    let recs = recommend(&history, &sample_corpus(), 1);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].candidate.text, "행복한 하루");
    assert_eq!(recs[0].candidate.brand, "A");
    assert!((recs[0].similarity - 1.0).abs() < 1e-9);
    assert_eq!(recs[0].reason, "emotional style");
}

#[test]
fn recommend_requires_three_rated_items() {
    let history = vec![item("행복한 하루", 9), item("행복한 하루", 10)];
    assert_eq!(
        try_recommend(&history, &sample_corpus(), 10),
        Err(SkipReason::InsufficientHistory { have: 2, need: 3 })
    );
    assert!(recommend(&history, &sample_corpus(), 10).is_empty());
}

#[test]
fn recommend_requires_non_empty_corpus() {
    let history = vec![item("a", 9), item("b", 9), item("c", 9)];
    assert_eq!(try_recommend(&history, &[], 10), Err(SkipReason::EmptyCorpus));
}

#[test]
fn recommend_requires_a_liked_item() {
    let history = vec![item("행복한 하루", 6), item("행복한 하루", 1), item("행복한 하루", 5)];
    assert_eq!(
        try_recommend(&history, &sample_corpus(), 10),
        Err(SkipReason::NoLikedItems)
    );
}

#[test]
fn recommend_with_empty_vocabulary_is_skipped() {
    let history = vec![item("!", 9), item("?", 9), item(".", 9)];
    let corpus = vec![copy("ㅋ", "A", "humor")];
    assert_eq!(
        try_recommend(&history, &corpus, 10),
        Err(SkipReason::EmptyVocabulary)
    );
}

#[test]
fn recommend_only_uses_liked_items_for_profile() {
    // The disliked item matches the insurance copy exactly but must not pull it in.
    let history = vec![
        item("행복한 하루", 8),
        item("든든한 자동차 보험", 1),
        item("아무 말", 4),
    ];
    let recs = recommend(&history, &sample_corpus(), 10);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].candidate.category, "emotional");
}

#[test]
fn recommend_profile_averages_several_liked_items() {
    let history = vec![
        item("행복한 하루", 9),
        item("스마트 기술", 8),
        item("아무 말", 2),
    ];
    let recs = recommend(&history, &sample_corpus(), 10);
    let categories: Vec<&str> = recs.iter().map(|r| r.candidate.category.as_str()).collect();
    assert_eq!(categories.len(), 2);
    assert!(categories.contains(&"emotional"));
    assert!(categories.contains(&"informative"));
    assert!(recs.iter().all(|r| r.similarity < 1.0 - 1e-9));
}

#[test]
fn recommend_output_is_bounded_and_sorted() {
    let history = vec![
        item("행복한 하루 커피", 9),
        item("커피 한잔의 여유", 7),
        item("자동차", 1),
    ];
    let corpus = vec![
        copy("커피 한잔", "A", "food"),
        copy("행복한 커피 하루", "B", "food"),
        copy("여유로운 하루", "C", "life"),
        copy("한잔 커피 여유", "D", "food"),
        copy("전혀 무관한 문구", "E", "other"),
    ];
    for top_n in [1, 2, 10] {
        let recs = recommend(&history, &corpus, top_n);
        assert!(recs.len() <= top_n);
        assert!(recs
            .iter()
            .all(|r| (0.0..=1.0).contains(&r.similarity) && r.similarity >= MIN_SIMILARITY));
        assert!(recs.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }
}

#[test]
fn find_similar_requires_two_items() {
    let history = vec![item("행복한 하루", 9)];
    assert_eq!(
        try_find_similar("행복한 하루", &history, 3),
        Err(SkipReason::InsufficientHistory { have: 1, need: 2 })
    );
    assert!(find_similar("행복한 하루", &history, 3).is_empty());
}

#[test]
fn find_similar_ranks_history_by_text() {
    let history = vec![
        item("자동차 보험 할인", 3),
        item("행복한 하루 시작", 9),
        item("행복한 주말", 6),
    ];
    let similar = find_similar("행복한 하루", &history, 3);
    assert_eq!(similar.len(), 2);
    assert_eq!(similar[0].0.text, "행복한 하루 시작");
    assert_eq!(similar[1].0.text, "행복한 주말");
    assert!(similar[0].1 > similar[1].1);
}

#[test]
fn find_similar_truncates_to_top_n() {
    let history = vec![
        item("행복한 하루", 9),
        item("행복한 하루", 8),
        item("행복한 하루", 7),
    ];
    let similar = find_similar("행복한 하루", &history, 2);
    assert_eq!(similar.len(), 2);
    assert_eq!(similar[0].0.rating, 9);
    assert_eq!(similar[1].0.rating, 8);
}

#[test]
fn find_similar_with_empty_vocabulary_is_skipped() {
    let history = vec![item("!", 9), item("?", 9)];
    assert_eq!(
        try_find_similar("...", &history, 3),
        Err(SkipReason::EmptyVocabulary)
    );
}
