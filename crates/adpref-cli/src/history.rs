//! Read-only history commands.

use adpref_core::Storage;
use adpref_recommend::{aggregate_preferences, PreferenceReport, RatingGroup};
use anyhow::Context;

use crate::App;

const TEXT_PREVIEW_CHARS: usize = 40;

fn preview(text: &str) -> String {
    if text.chars().count() <= TEXT_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
    format!("{cut}...")
}

/// List every stored rating in insertion order.
pub(crate) fn run_history(app: &App) -> anyhow::Result<()> {
    let items = app.store.load_items().context("failed to load history")?;

    if items.is_empty() {
        println!("no ratings yet; run `adpref rate` first");
        return Ok(());
    }

    println!("{:<18}{:<8}{:<26}TEXT", "RATED", "RATING", "SENTIMENT");
    for item in &items {
        let sentiment = item
            .analysis
            .as_ref()
            .map_or_else(|| "-".to_string(), |a| format!("{} ({:.2})", a.label, a.score));
        println!(
            "{:<18}{:<8}{:<26}{}",
            item.created_at.format("%Y-%m-%d %H:%M"),
            item.rating,
            sentiment,
            preview(&item.text)
        );
    }

    Ok(())
}

/// Print the preference report for the stored history.
pub(crate) fn run_report(app: &App) -> anyhow::Result<()> {
    let items = app.store.load_items().context("failed to load history")?;

    match aggregate_preferences(&items) {
        Some(report) => print!("{}", render_report(&report)),
        None => println!("no ratings yet; run `adpref rate` first"),
    }
    Ok(())
}

fn fmt_group(group: &RatingGroup) -> String {
    format!("{:.1}/10 over {} ads", group.average, group.count)
}

fn push_groups(out: &mut String, title: &str, groups: &[RatingGroup]) {
    if groups.is_empty() {
        return;
    }
    out.push_str(&format!("\n{title}\n"));
    for group in groups {
        out.push_str(&format!("  {:<26}{}\n", group.key, fmt_group(group)));
    }
}

/// Render the report as plain text.
pub(crate) fn render_report(report: &PreferenceReport) -> String {
    let mut out = format!(
        "{} rated ads, average {:.1}/10\n",
        report.item_count, report.average_rating
    );

    push_groups(&mut out, "By tone", &report.tones);
    push_groups(&mut out, "By style", &report.styles);

    if let Some(mixed) = &report.mixed {
        out.push_str(&format!("\nMixed sentiment: {}\n", fmt_group(mixed)));
    }

    let language: Vec<RatingGroup> = [
        &report.language.short,
        &report.language.long,
        &report.language.exclamation,
        &report.language.question,
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();
    push_groups(&mut out, "By wording", &language);

    push_groups(&mut out, "Effective keywords", &report.effective_keywords);

    if let Some(correlation) = &report.tone_correlation {
        out.push_str(&format!(
            "\nPositive copy: {}\nNegative copy: {}\n",
            fmt_group(&correlation.positive),
            fmt_group(&correlation.negative)
        ));
    }

    out.push_str(&format!(
        "\nBest:  [{}] {}\n",
        report.best.rating,
        preview(&report.best.text)
    ));
    if let Some(worst) = &report.worst {
        out.push_str(&format!("Worst: [{}] {}\n", worst.rating, preview(&worst.text)));
    }

    out
}
