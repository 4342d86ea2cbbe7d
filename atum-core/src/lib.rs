#![deny(missing_docs)]
//! Atum core library.
//!
//! This crate contains the deterministic quality scorer, the fallback
//! templates and the generation operations that power the Atum service.

pub mod codegen;
pub mod docgen;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod grade;
pub mod metrics;
pub mod prompts;
pub mod quality;
pub mod report;
pub mod scanner;
pub mod testgen;

pub use codegen::generate_code;
pub use docgen::{build_filename, generate_docs, generate_docs_at};
pub use domain::{
    CodeGenerationRequest, CodeGenerationResponse, GenerateDocsRequest, GenerateDocsResponse,
    GenerateTestsRequest, GenerateTestsResponse, MetricResult, QualityReport, QualityReportRequest,
};
pub use error::{AtumError, Result};
pub use fallback::{TestTemplate, fallback_code, fallback_documentation, fallback_tests};
pub use generator::{Generator, OfflineGenerator, generate_usable};
pub use grade::{Grade, score_to_grade};
pub use quality::generate_quality_report;
pub use report::{render_json, render_quality_markdown, render_quality_text};
pub use scanner::significant_lines;
pub use testgen::generate_tests;
