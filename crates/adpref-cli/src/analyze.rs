//! Analysis and rating command handlers.

use std::path::Path;

use adpref_core::{AnalysisResult, RatedItem, ScoredCategory, Storage};
use anyhow::Context;

use crate::App;

/// Print a full analysis of `text`, or a notice when the lexicon is unavailable.
pub(crate) fn run_analyze(app: &App, text: &str) -> anyhow::Result<()> {
    match app.scorer.analyze(text) {
        Some(result) => print_analysis(&result),
        None => println!("sentiment analysis unavailable; check ADPREF_LEXICON_PATH"),
    }
    Ok(())
}

/// Analyze `text` and append it to the history with `rating`.
pub(crate) fn run_rate(app: &App, text: &str, rating: u8) -> anyhow::Result<()> {
    let analysis = app.scorer.analyze(text);
    if let Some(result) = &analysis {
        print_analysis(result);
    }

    let item = RatedItem::new(text, rating, analysis)?;
    app.store
        .append_and_persist(item)
        .context("failed to save rating")?;

    println!("saved rating {rating}/10 to {}", app.store.path().display());
    Ok(())
}

/// Rate every line of a `rating<TAB>text` file and persist them in one write.
pub(crate) fn run_batch(app: &App, file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read batch file {}", file.display()))?;
    let entries = parse_batch(&raw)?;

    if entries.is_empty() {
        println!("no entries found in {}", file.display());
        return Ok(());
    }

    let items = entries
        .into_iter()
        .map(|(rating, text)| {
            let analysis = app.scorer.analyze(&text);
            RatedItem::new(text, rating, analysis)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let count = items.len();

    app.store
        .append_all_and_persist(items)
        .context("failed to save batch ratings")?;

    println!("saved {count} ratings to {}", app.store.path().display());
    Ok(())
}

/// Parse `rating<TAB>text` lines. Blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns an error naming the first line without a tab, with a non-numeric
/// rating, or with a rating outside 1..=10.
pub(crate) fn parse_batch(raw: &str) -> anyhow::Result<Vec<(u8, String)>> {
    let mut entries = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let (rating, text) = line
            .split_once('\t')
            .with_context(|| format!("line {line_no}: expected `rating<TAB>text`"))?;
        let rating: u8 = rating
            .trim()
            .parse()
            .with_context(|| format!("line {line_no}: invalid rating '{}'", rating.trim()))?;
        if !(adpref_core::MIN_RATING..=adpref_core::MAX_RATING).contains(&rating) {
            anyhow::bail!("line {line_no}: rating {rating} is outside 1-10");
        }

        let text = text.trim();
        if text.is_empty() {
            anyhow::bail!("line {line_no}: missing ad copy");
        }
        entries.push((rating, text.to_string()));
    }

    Ok(entries)
}

fn fmt_categories(categories: &[ScoredCategory]) -> String {
    categories
        .iter()
        .map(|c| format!("{}({})", c.name, c.score))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fmt_words(words: &[adpref_core::WordPolarity]) -> String {
    if words.is_empty() {
        return "-".to_string();
    }
    words
        .iter()
        .map(|(word, polarity)| format!("{word}({polarity:+})"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_analysis(result: &AnalysisResult) {
    println!("sentiment: {} ({:.2})", result.label, result.score);
    println!("positive:  {}", fmt_words(&result.positive_words));
    println!("negative:  {}", fmt_words(&result.negative_words));
    if result.conflict.has_conflict {
        println!(
            "conflict:  positive {:.0} vs negative {:.0}",
            result.conflict.positive_strength, result.conflict.negative_strength
        );
    }
    println!("styles:    {}", fmt_categories(&result.styles));
    println!("industry:  {}", fmt_categories(&result.industries));
    println!("keywords:  {}", fmt_words(&result.keywords));

    let pattern = &result.language_pattern;
    println!(
        "length:    {} chars, {} words, {} sentences{}{}{}",
        pattern.length,
        pattern.word_count,
        pattern.sentence_count,
        if pattern.has_exclamation { ", !" } else { "" },
        if pattern.has_question { ", ?" } else { "" },
        if pattern.has_emoji { ", emoji" } else { "" },
    );
}
