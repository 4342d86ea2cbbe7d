//! Heuristic quality metrics computed over significant lines.
//!
//! Every evaluator is a pure function of the trimmed, non-empty lines of a
//! submission. The heuristics are syntax-blind text matches so they apply to
//! any language the same way.

use std::collections::HashSet;

use crate::domain::MetricResult;
use crate::grade::score_to_grade;

/// Tokens counted as branching points (case-insensitive substring match).
pub const COMPLEXITY_KEYWORDS: &[&str] = &[
    "if", "for", "while", "case", "when", "catch", "elif", "else if", "switch", "&&", "||",
];

/// Tokens that mark a line as carrying known risk.
pub const RISK_HINTS: &[&str] = &["todo", "fixme", "hack", "bug", "xxx"];

/// Metric name for cyclomatic complexity.
pub const COMPLEXITY_METRIC: &str = "Cyclomatic Complexity";
/// Metric name for defect density.
pub const DEFECT_DENSITY_METRIC: &str = "Defect Density";
/// Metric name for code duplication.
pub const DUPLICATION_METRIC: &str = "Code Duplication";
/// Metric name for code size.
pub const LOC_METRIC: &str = "Lines of Code";

/// Lines this short or shorter (in characters) are never counted as duplicates.
const MIN_DUPLICATE_LEN: usize = 3;

/// Score branching density from keyword hits.
pub fn cyclomatic_complexity(lines: &[&str]) -> MetricResult {
    let hits: usize = lines
        .iter()
        .map(|line| {
            let lowered = line.to_lowercase();
            COMPLEXITY_KEYWORDS
                .iter()
                .map(|keyword| lowered.matches(keyword).count())
                .sum::<usize>()
        })
        .sum();
    let score = clamp_score(100 - (hits as i64).saturating_mul(6));
    let advice = if score < 70 {
        "Consider refactoring into smaller functions."
    } else {
        "Structure looks manageable."
    };
    metric(
        COMPLEXITY_METRIC,
        score,
        format!("Cyclomatic complexity detected {hits} branching points. {advice}"),
    )
}

/// Score the share of lines carrying TODO/FIXME-style markers.
pub fn defect_density(lines: &[&str]) -> MetricResult {
    let risk_lines = lines
        .iter()
        .filter(|line| {
            let lowered = line.to_lowercase();
            RISK_HINTS.iter().any(|hint| lowered.contains(hint))
        })
        .count();
    let density = risk_lines as f64 / lines.len().max(1) as f64;
    let score = clamp_score(round_half_even(100.0 - density * 500.0));
    let explanation = if risk_lines <= 1 {
        format!("Limited risk markers ({risk_lines}) found.")
    } else {
        format!(
            "Found {risk_lines} potential TODO/FIXME markers. Address them to reduce defects."
        )
    };
    metric(DEFECT_DENSITY_METRIC, score, explanation)
}

/// Score repeated lines, ignoring trivially short ones.
///
/// The ratio is taken against every significant line, including the short
/// lines that were skipped when counting duplicates.
pub fn code_duplication(lines: &[&str]) -> MetricResult {
    let mut seen = HashSet::new();
    let mut duplicates = 0usize;
    for line in lines.iter().filter(|line| line.chars().count() > MIN_DUPLICATE_LEN) {
        if !seen.insert(line.to_lowercase()) {
            duplicates += 1;
        }
    }
    let ratio = duplicates as f64 / lines.len().max(1) as f64;
    let score = clamp_score(round_half_even(100.0 - ratio * 600.0));
    let explanation = if duplicates == 0 {
        "Minimal duplication detected.".to_string()
    } else {
        format!("Detected {duplicates} duplicated lines. Consolidate shared logic.")
    };
    metric(DUPLICATION_METRIC, score, explanation)
}

/// Score submission size in significant lines.
pub fn lines_of_code(lines: &[&str]) -> MetricResult {
    let loc = lines.len();
    let score = loc_score(loc);
    let advice = if score < 70 {
        "Stay concise to ease reviews."
    } else {
        "Size looks manageable."
    };
    metric(
        LOC_METRIC,
        score,
        format!("Code spans {loc} significant lines. {advice}"),
    )
}

fn loc_score(loc: usize) -> u8 {
    match loc {
        0..=100 => 95,
        101..=250 => 80,
        251..=500 => 65,
        _ => {
            let decay = ((loc - 500) / 5).min(100) as i64;
            clamp_score((100 - decay).max(40))
        }
    }
}

fn metric(name: &str, score: u8, explanation: String) -> MetricResult {
    MetricResult {
        name: name.to_string(),
        score,
        letter: score_to_grade(i64::from(score)),
        explanation,
    }
}

pub(crate) fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Round to the nearest integer, resolving exact halves to the even neighbour.
pub(crate) fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Grade;

    #[test]
    fn complexity_without_keywords_is_perfect() {
        let result = cyclomatic_complexity(&["x = 1", "y = 2", "print(x + y)"]);
        assert_eq!(result.name, "Cyclomatic Complexity");
        assert_eq!(result.score, 100);
        assert_eq!(result.letter, Grade::APlus);
        assert_eq!(
            result.explanation,
            "Cyclomatic complexity detected 0 branching points. Structure looks manageable."
        );
    }

    #[test]
    fn complexity_counts_every_occurrence_case_insensitively() {
        // "IF" and "if" both count; "elif" also contains "if".
        let result = cyclomatic_complexity(&["IF a && b:", "elif c || d:", "for x in y:"]);
        // line 1: if, && -> 2; line 2: if, elif, || -> 3; line 3: for -> 1
        assert_eq!(result.score, 100 - 6 * 6);
        assert!(result.explanation.contains("6 branching points"));
        assert!(result.explanation.ends_with("Consider refactoring into smaller functions."));
    }

    #[test]
    fn complexity_floors_at_zero() {
        let lines = vec!["if if if if if if"; 10];
        assert_eq!(cyclomatic_complexity(&lines).score, 0);
    }

    #[test]
    fn defect_density_counts_lines_not_occurrences() {
        let lines = [
            "# TODO fix TODO later",
            "value = 1",
            "value = 2",
            "value = 3",
            "value = 4",
            "value = 5",
            "value = 6",
            "value = 7",
            "value = 8",
            "value = 9",
        ];
        let result = defect_density(&lines);
        assert_eq!(result.score, 50);
        assert_eq!(result.explanation, "Limited risk markers (1) found.");
    }

    #[test]
    fn defect_density_warns_on_multiple_markers() {
        let result = defect_density(&["// FIXME", "// hack", "ok()"]);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.explanation,
            "Found 2 potential TODO/FIXME markers. Address them to reduce defects."
        );
        assert_eq!(result.letter, Grade::F);
    }

    #[test]
    fn defect_density_tolerates_empty_input() {
        let result = defect_density(&[]);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn duplication_counts_repeats_only() {
        let lines = ["return true", "return true", "return true", "a = 1", "b = 2"];
        let result = code_duplication(&lines);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.explanation,
            "Detected 2 duplicated lines. Consolidate shared logic."
        );
    }

    #[test]
    fn duplication_ignores_short_lines_and_normalizes_case() {
        let lines = ["}", "}", "{", "{", "Call()", "call()"];
        let result = code_duplication(&lines);
        // one duplicate over six lines: 100 - 100 = 0
        assert_eq!(result.score, 0);

        let short_only = code_duplication(&["}", "}", "end", "end"]);
        assert_eq!(short_only.score, 100);
        assert_eq!(short_only.explanation, "Minimal duplication detected.");
    }

    #[test]
    fn duplication_measures_length_in_characters() {
        // "ééé" is six bytes but only three characters.
        let result = code_duplication(&["ééé", "ééé", "x = 1", "y = 2"]);
        assert_eq!(result.score, 100);
        assert_eq!(result.explanation, "Minimal duplication detected.");

        let longer = code_duplication(&["éééé", "ÉÉÉÉ", "x = 1", "y = 2"]);
        // one duplicate over four lines: 100 - 150 clamps to 0
        assert_eq!(longer.score, 0);
    }

    #[test]
    fn duplication_ratio_is_diluted_by_all_lines() {
        let mut lines = vec!["shared_call()"; 2];
        lines.extend(std::iter::repeat_n("}", 18));
        // 1 duplicate / 20 lines * 600 = 30
        assert_eq!(code_duplication(&lines).score, 70);
    }

    #[test]
    fn loc_bands_are_inclusive_at_upper_bound() {
        assert_eq!(lines_of_code(&vec!["x"; 100]).score, 95);
        assert_eq!(lines_of_code(&vec!["x"; 101]).score, 80);
        assert_eq!(lines_of_code(&vec!["x"; 250]).score, 80);
        assert_eq!(lines_of_code(&vec!["x"; 251]).score, 65);
        assert_eq!(lines_of_code(&vec!["x"; 500]).score, 65);
    }

    #[test]
    fn loc_decays_linearly_with_floor() {
        assert_eq!(loc_score(501), 100);
        assert_eq!(loc_score(505), 99);
        assert_eq!(loc_score(700), 60);
        assert_eq!(loc_score(1000), 40);
        assert_eq!(loc_score(50_000), 40);
    }

    #[test]
    fn loc_explanation_reports_size() {
        let result = lines_of_code(&vec!["x"; 300]);
        assert_eq!(
            result.explanation,
            "Code spans 300 significant lines. Stay concise to ease reviews."
        );
        let small = lines_of_code(&["x"]);
        assert_eq!(
            small.explanation,
            "Code spans 1 significant lines. Size looks manageable."
        );
    }

    #[test]
    fn rounding_resolves_halves_to_even() {
        assert_eq!(round_half_even(82.5), 82);
        assert_eq!(round_half_even(83.5), 84);
        assert_eq!(round_half_even(71.4), 71);
    }
}
