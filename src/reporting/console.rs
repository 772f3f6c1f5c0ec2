// src/reporting/console.rs
//! Colored terminal output.

use super::QualityReport;
use crate::compare::{ComparisonReport, Evolution, IndicatorDelta};
use crate::scoring::{ScoreBand, Verdict};
use colored::{ColoredString, Colorize};
use std::cmp::Ordering;

fn paint_band(band: ScoreBand) -> ColoredString {
    let label = format!("{:>5}", band.label());
    match band {
        ScoreBand::L5 => label.green().bold(),
        ScoreBand::L4 => label.green(),
        ScoreBand::L3 => label.yellow(),
        ScoreBand::L2 | ScoreBand::L1 => label.red(),
        ScoreBand::NotApplicable => label.dimmed(),
    }
}

/// Prints the indicator table, any recommendations and the assessment.
pub fn print_report(report: &QualityReport) {
    println!("{}", format!("OQuaRE quality report: {}", report.ontology).bold());
    println!("{}", format!("root policy: {}", report.root_policy).dimmed());
    println!();
    println!("{:<10} {:>12} {:>5}  {}", "Metric", "Value", "Score", "Description");
    println!("{}", "─".repeat(64).dimmed());

    for (indicator, value) in report.indicators.iter() {
        println!(
            "{:<10} {:>12} {}  {}",
            indicator.name(),
            value.to_string(),
            paint_band(report.band(indicator)),
            indicator.description().dimmed()
        );
    }

    let mut advice = report.active_recommendations().peekable();
    if advice.peek().is_some() {
        println!();
        println!("{}", "RECOMMENDATIONS".yellow().bold());
        for (indicator, text) in advice {
            println!();
            println!("{} {text}", format!("[{indicator}]").yellow());
        }
    }

    print_assessment(report);
}

fn print_assessment(report: &QualityReport) {
    let a = &report.assessment;
    let verdict = match a.verdict {
        Verdict::HighQuality => a.verdict.label().green().bold(),
        Verdict::ModerateQuality => a.verdict.label().yellow().bold(),
        Verdict::NeedsImprovement => a.verdict.label().red().bold(),
    };
    let spread: Vec<String> = ScoreBand::RANKED
        .iter()
        .map(|b| {
            let n = a.distribution.get(b.label()).copied().unwrap_or(0);
            format!("{b}:{n}")
        })
        .collect();

    println!();
    println!(
        "Assessment: {verdict} ({:.1}% at L5; {})",
        a.l5_percentage,
        spread.join(" ")
    );
}

fn change_symbol(delta: &IndicatorDelta) -> ColoredString {
    match delta.direction() {
        Ordering::Greater => "✓".green(),
        Ordering::Less => "✗".red(),
        Ordering::Equal => "-".dimmed(),
    }
}

fn percent_label(delta: &IndicatorDelta) -> String {
    delta
        .percent_change
        .map_or_else(|| "N/A".to_string(), |p| format!("{p:.2}%"))
}

/// Prints the aggregate summary and the `top` largest changes.
pub fn print_comparison(report: &ComparisonReport, top: usize) {
    let s = &report.summary;
    println!(
        "{}",
        format!("COMPARISON: {} vs {}", report.name_a, report.name_b).bold()
    );
    println!("  Total:          {}", s.total);
    println!("  Improved:       {} {}", s.improved, "✓".green());
    println!("  Degraded:       {} {}", s.degraded, "✗".red());
    println!("  Unchanged:      {} -", s.unchanged);
    println!("  Average change: {:.2}%", s.average_percent_change);

    let changes = report.top_changes(top);
    if changes.is_empty() {
        return;
    }
    println!();
    println!("{}", format!("TOP {} CHANGES (by absolute difference)", changes.len()).bold());
    for (rank, delta) in changes.iter().enumerate() {
        println!(
            "  {}. {:<10} {:>10.2} → {:<10.2} diff {:>+9.2} ({}) {}",
            rank + 1,
            delta.name,
            delta.value_a,
            delta.value_b,
            delta.difference,
            percent_label(delta),
            change_symbol(delta)
        );
    }
}

/// Prints each indicator's series and the most recent step.
pub fn print_evolution(evolution: &Evolution) {
    if evolution.is_empty() {
        println!("{}", "No evaluations found.".yellow());
        return;
    }
    println!(
        "{}",
        format!("EVOLUTION over {} evaluations", evolution.labels.len()).bold()
    );
    println!("  {}", evolution.labels.join(" → ").dimmed());
    println!();

    for (name, points) in &evolution.series {
        let values: Vec<String> = evolution
            .labels
            .iter()
            .map(|label| points.get(label).map_or_else(|| "-".to_string(), |v| format!("{v:.2}")))
            .collect();
        println!("  {name:<10} {}", values.join("  "));
    }

    if let Some(step) = evolution.latest_step() {
        println!();
        print_comparison(step, 5);
    }
}
