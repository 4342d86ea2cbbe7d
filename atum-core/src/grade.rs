//! Letter grades for quality scores.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discrete letter grade derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Grade {
    /// 97 and above.
    #[serde(rename = "A+")]
    APlus,
    /// 93 to 96.
    #[serde(rename = "A")]
    A,
    /// 90 to 92.
    #[serde(rename = "A-")]
    AMinus,
    /// 87 to 89.
    #[serde(rename = "B+")]
    BPlus,
    /// 83 to 86.
    #[serde(rename = "B")]
    B,
    /// 80 to 82.
    #[serde(rename = "B-")]
    BMinus,
    /// 77 to 79.
    #[serde(rename = "C+")]
    CPlus,
    /// 73 to 76.
    #[serde(rename = "C")]
    C,
    /// 70 to 72.
    #[serde(rename = "C-")]
    CMinus,
    /// 60 to 69.
    #[serde(rename = "D")]
    D,
    /// Below 60.
    #[serde(rename = "F")]
    F,
}

const GRADE_THRESHOLDS: [(i64, Grade); 10] = [
    (97, Grade::APlus),
    (93, Grade::A),
    (90, Grade::AMinus),
    (87, Grade::BPlus),
    (83, Grade::B),
    (80, Grade::BMinus),
    (77, Grade::CPlus),
    (73, Grade::C),
    (70, Grade::CMinus),
    (60, Grade::D),
];

impl Grade {
    /// Display label, e.g. `"A-"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score to its letter grade.
///
/// Thresholds are inclusive lower bounds checked highest-first, so any integer
/// (including negatives and values above 100) has a grade.
pub fn score_to_grade(score: i64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}
