//! Markdown documentation generation with template fallback.

use chrono::{DateTime, Utc};

use crate::domain::{GenerateDocsRequest, GenerateDocsResponse};
use crate::fallback::fallback_documentation;
use crate::generator::{Generator, fallback_note, generate_usable};
use crate::prompts::docs_prompt;
use crate::quality::EMPTY_CODE_MESSAGE;

/// Project name used when the request omits one.
pub const DEFAULT_PROJECT_NAME: &str = "Proyecto Atum";
/// Language label used when the request omits one.
pub const DEFAULT_LANGUAGE_LABEL: &str = "the provided code";

const FALLBACK_FILENAME_BASE: &str = "atum_project";

/// Generate Markdown documentation stamped with the current UTC time.
pub fn generate_docs<G: Generator + ?Sized>(
    generator: &G,
    model: &str,
    request: &GenerateDocsRequest,
) -> GenerateDocsResponse {
    generate_docs_at(generator, model, request, Utc::now())
}

/// Generate Markdown documentation with an explicit timestamp for the filename.
pub fn generate_docs_at<G: Generator + ?Sized>(
    generator: &G,
    model: &str,
    request: &GenerateDocsRequest,
    now: DateTime<Utc>,
) -> GenerateDocsResponse {
    let code = request.code.trim();
    if code.is_empty() {
        return GenerateDocsResponse {
            ok: false,
            filename: String::new(),
            content: String::new(),
            notes: vec![EMPTY_CODE_MESSAGE.to_string()],
        };
    }

    let language = non_blank(request.language.as_deref()).unwrap_or(DEFAULT_LANGUAGE_LABEL);
    let project_name =
        non_blank(request.project_name.as_deref()).unwrap_or(DEFAULT_PROJECT_NAME);
    let filename = build_filename(project_name, now);

    let prompt = docs_prompt(code, language, project_name);
    let (content, note) = match generate_usable(generator, model, &prompt) {
        Ok(content) => (content, "Documentation generated successfully".to_string()),
        Err(err) => {
            log::warn!("documentation for {project_name} fell back to template: {err}");
            (
                fallback_documentation(code, language, project_name),
                fallback_note(&err),
            )
        }
    };

    GenerateDocsResponse {
        ok: true,
        filename,
        content,
        notes: vec![note],
    }
}

/// Build `<project>_documentation_<YYYYmmdd_HHMMSS>.md`.
///
/// Non-alphanumeric characters in the project name become underscores.
pub fn build_filename(project_name: &str, now: DateTime<Utc>) -> String {
    let base: String = project_name
        .chars()
        .flat_map(|ch| {
            if ch.is_alphanumeric() {
                ch.to_lowercase().collect::<Vec<_>>()
            } else {
                vec!['_']
            }
        })
        .collect();
    let base = if base.is_empty() {
        FALLBACK_FILENAME_BASE
    } else {
        base.as_str()
    };
    format!(
        "{base}_documentation_{}.md",
        now.format("%Y%m%d_%H%M%S")
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
