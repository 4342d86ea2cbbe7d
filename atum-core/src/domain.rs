//! Request and response records exchanged with callers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::grade::Grade;

/// One scored quality dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricResult {
    /// Metric display name.
    pub name: String,
    /// Score clamped to 0-100.
    pub score: u8,
    /// Letter grade for the score.
    pub letter: Grade,
    /// Human-readable explanation.
    pub explanation: String,
}

/// Request payload for a quality report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QualityReportRequest {
    /// Source code to analyze.
    #[serde(default)]
    pub code: String,
    /// Declared language of the code.
    #[serde(default)]
    pub language: Option<String>,
}

/// Aggregated quality report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QualityReport {
    /// Whether the code could be analyzed.
    pub ok: bool,
    /// Rounded mean of the metric scores.
    pub final_score: u8,
    /// Letter grade for the final score.
    pub final_grade: Grade,
    /// Metric results in evaluation order.
    pub metrics: Vec<MetricResult>,
    /// Improvement suggestions; never empty.
    pub suggestions: Vec<String>,
}

/// Request payload for unit test generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateTestsRequest {
    /// Source code under test.
    #[serde(default)]
    pub code: String,
    /// Language of the code (e.g. "python").
    #[serde(default)]
    pub language: String,
    /// Test framework to target (e.g. "pytest").
    #[serde(default)]
    pub framework: String,
}

/// Response payload for unit test generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateTestsResponse {
    /// Whether usable tests were produced.
    pub ok: bool,
    /// Generated test source.
    pub tests: String,
    /// Echoed language.
    pub language: String,
    /// Echoed framework.
    pub framework: String,
    /// Informational or error notes.
    pub notes: Vec<String>,
}

/// Request payload for documentation generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateDocsRequest {
    /// Source code to document.
    #[serde(default)]
    pub code: String,
    /// Language of the code.
    #[serde(default)]
    pub language: Option<String>,
    /// Project name used in the document and filename.
    #[serde(default)]
    pub project_name: Option<String>,
}

/// Response payload for documentation generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateDocsResponse {
    /// Whether a usable document was produced.
    pub ok: bool,
    /// Suggested Markdown filename.
    pub filename: String,
    /// Markdown content.
    pub content: String,
    /// Informational or error notes.
    pub notes: Vec<String>,
}

/// Request payload for code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CodeGenerationRequest {
    /// Natural-language description of the code to write.
    #[serde(default)]
    pub query: String,
    /// Target language.
    #[serde(default)]
    pub language: String,
}

/// Response payload for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CodeGenerationResponse {
    /// Whether usable code was produced.
    pub ok: bool,
    /// Echoed request description.
    pub query: String,
    /// Echoed language.
    pub language: String,
    /// Generated source code.
    pub generated_code: String,
    /// Informational or error notes.
    pub notes: Vec<String>,
}
