//! Quality report aggregation.

use crate::domain::{MetricResult, QualityReport, QualityReportRequest};
use crate::grade::{Grade, score_to_grade};
use crate::metrics::{
    clamp_score, code_duplication, cyclomatic_complexity, defect_density, lines_of_code,
    round_half_even,
};
use crate::scanner::significant_lines;

/// Message returned when no code was submitted.
pub const EMPTY_CODE_MESSAGE: &str = "Error: Code cannot be empty";

/// Metrics scoring below this threshold contribute a suggestion.
const SUGGESTION_THRESHOLD: u8 = 80;

/// Score submitted code and build a quality report.
///
/// Blank submissions short-circuit to a failed report before any metric runs.
pub fn generate_quality_report(request: &QualityReportRequest) -> QualityReport {
    let code = request.code.trim();
    if code.is_empty() {
        return QualityReport {
            ok: false,
            final_score: 0,
            final_grade: Grade::F,
            metrics: Vec::new(),
            suggestions: vec![EMPTY_CODE_MESSAGE.to_string()],
        };
    }

    let lines = significant_lines(code);
    let metrics = vec![
        cyclomatic_complexity(&lines),
        defect_density(&lines),
        code_duplication(&lines),
        lines_of_code(&lines),
    ];

    let final_score = final_score(&metrics);
    let suggestions = collect_suggestions(&metrics, request.language.as_deref());
    QualityReport {
        ok: true,
        final_score,
        final_grade: score_to_grade(i64::from(final_score)),
        metrics,
        suggestions,
    }
}

fn final_score(metrics: &[MetricResult]) -> u8 {
    if metrics.is_empty() {
        return 0;
    }
    let total: u32 = metrics.iter().map(|metric| u32::from(metric.score)).sum();
    clamp_score(round_half_even(f64::from(total) / metrics.len() as f64))
}

fn collect_suggestions(metrics: &[MetricResult], language: Option<&str>) -> Vec<String> {
    let suggestions: Vec<String> = metrics
        .iter()
        .filter(|metric| metric.score < SUGGESTION_THRESHOLD)
        .map(|metric| metric.explanation.clone())
        .collect();
    if !suggestions.is_empty() {
        return suggestions;
    }
    let subject = language
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .unwrap_or("Code");
    vec![format!("{subject} quality is within acceptable range.")]
}
