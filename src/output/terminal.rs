//! Terminal output rendering for comparison reports.
//!
//! Lower frame cost is better, so a negative mean change is rendered as an
//! improvement and a positive one as a regression.

use crate::comparison::{ComparisonReport, ReportSeries};
use colored::*;

/// Render a human-readable summary of a comparison report for the terminal
pub fn render_terminal_summary(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    if let Some(baseline) = report.series.first() {
        out.push_str(&render_baseline(baseline));
    }
    for variant in report.variants() {
        out.push_str(&render_variant(variant));
    }

    out
}

fn render_header(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"Frame Time Comparison Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Frame time channel: {}\n", report.frame_time_channel));
    out.push_str(&format!("Smoothing weight:   {}\n", report.smoothing_weight));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_baseline(series: &ReportSeries) -> String {
    format!(
        "{} {}\n    {}\n",
        "■".blue(),
        series.label.bold(),
        series.stats.summary()
    )
}

fn render_variant(series: &ReportSeries) -> String {
    let change = format!("{:+.2}%", series.mean_change_percent);
    let change = if series.mean_change_percent < 0.0 {
        change.green()
    } else if series.mean_change_percent > 0.0 {
        change.red()
    } else {
        change.normal()
    };

    format!(
        "{} {} (mean {} vs baseline)\n    {}\n",
        "■".yellow(),
        series.label.bold(),
        change,
        series.stats.summary()
    )
}
