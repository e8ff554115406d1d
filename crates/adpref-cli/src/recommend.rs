//! Similarity and recommendation commands.

use adpref_core::Storage;
use adpref_recommend::{category_distribution, try_find_similar, try_recommend};
use anyhow::Context;

use crate::App;

/// Show the rated items most similar to `text`.
pub(crate) fn run_similar(app: &App, text: &str, top_n: usize) -> anyhow::Result<()> {
    let items = app.store.load_items().context("failed to load history")?;

    let matches = match try_find_similar(text, &items, top_n) {
        Ok(matches) => matches,
        Err(reason) => {
            println!("no similar ads: {reason}");
            return Ok(());
        }
    };

    if matches.is_empty() {
        println!("no rated ads are similar enough");
        return Ok(());
    }

    println!("{:<12}{:<8}TEXT", "SIMILARITY", "RATING");
    for (item, similarity) in matches {
        println!("{:<12.3}{:<8}{}", similarity, item.rating, item.text);
    }
    Ok(())
}

/// Recommend corpus copy matching the profile of well-rated history.
pub(crate) fn run_recommend(app: &App, top_n: usize) -> anyhow::Result<()> {
    let items = app.store.load_items().context("failed to load history")?;
    let corpus = adpref_store::load_corpus(&app.config.corpus_path)
        .context("failed to load candidate corpus")?;

    let recommendations = match try_recommend(&items, &corpus, top_n) {
        Ok(recs) => recs,
        Err(reason) => {
            println!("no recommendations: {reason}");
            return Ok(());
        }
    };

    if recommendations.is_empty() {
        println!("no corpus copy matches your preferences yet");
        return Ok(());
    }

    println!("{:<12}{:<16}{:<20}TEXT", "SIMILARITY", "BRAND", "REASON");
    for rec in &recommendations {
        println!(
            "{:<12.3}{:<16}{:<20}{}",
            rec.similarity, rec.candidate.brand, rec.reason, rec.candidate.text
        );
    }

    let distribution = category_distribution(&recommendations)
        .into_iter()
        .map(|(category, count)| format!("{category} {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("\ncategories: {distribution}");
    Ok(())
}
