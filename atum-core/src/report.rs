//! Report formatting utilities for Atum outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{MetricResult, QualityReport};

/// Render a quality report as plain text for terminals.
pub fn render_quality_text(report: &QualityReport) -> String {
    let mut output = String::new();
    if !report.ok {
        append_plain_list(&mut output, &report.suggestions);
        return output;
    }
    let _ = writeln!(
        output,
        "Final grade: {} ({}/100)",
        report.final_grade, report.final_score
    );
    for metric in &report.metrics {
        let _ = writeln!(
            output,
            "  {:<22} {:>3}  {:<2}  {}",
            metric.name, metric.score, metric.letter, metric.explanation
        );
    }
    let _ = writeln!(output, "Suggestions:");
    append_plain_list(&mut output, &report.suggestions);
    output
}

/// Render a quality report as Markdown.
pub fn render_quality_markdown(report: &QualityReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Atum Quality Report\n");
    if !report.ok {
        append_list(&mut output, "Errors", &report.suggestions, "No errors reported.");
        return output;
    }
    let _ = writeln!(
        output,
        "- Final grade: **{}**\n- Final score: {}/100\n",
        report.final_grade, report.final_score
    );
    append_metrics(&mut output, &report.metrics);
    append_list(
        &mut output,
        "Suggestions",
        &report.suggestions,
        "No suggestions.",
    );
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_metrics(output: &mut String, metrics: &[MetricResult]) {
    if metrics.is_empty() {
        let _ = writeln!(output, "### Metrics\nNo metrics computed.\n");
        return;
    }
    let _ = writeln!(output, "### Metrics");
    let _ = writeln!(output, "| Metric | Score | Grade | Notes |");
    let _ = writeln!(output, "|---|---|---|---|");
    for metric in metrics {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} |",
            metric.name,
            metric.score,
            metric.letter,
            metric.explanation.replace('|', "\\|")
        );
    }
    let _ = writeln!(output);
}

fn append_plain_list(output: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(output, "  - {item}");
    }
}

fn append_list(output: &mut String, title: &str, items: &[String], empty_message: &str) {
    if items.is_empty() {
        let _ = writeln!(output, "### {title}\n{empty_message}\n");
        return;
    }
    let _ = writeln!(output, "### {title}");
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
    let _ = writeln!(output);
}
