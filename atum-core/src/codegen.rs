//! Source code generation from a natural-language request.

use crate::domain::{CodeGenerationRequest, CodeGenerationResponse};
use crate::fallback::fallback_code;
use crate::generator::{Generator, fallback_note, generate_usable};
use crate::prompts::code_prompt;
use crate::testgen::MISSING_LANGUAGE_MESSAGE;

/// Message returned when the request description is missing.
pub const EMPTY_QUERY_MESSAGE: &str = "Error: Query cannot be empty";

/// Generate code for a request, substituting a commented stub on failure.
pub fn generate_code<G: Generator + ?Sized>(
    generator: &G,
    model: &str,
    request: &CodeGenerationRequest,
) -> CodeGenerationResponse {
    let query = request.query.trim();
    let language = request.language.trim();
    let invalid = if query.is_empty() {
        Some(EMPTY_QUERY_MESSAGE)
    } else if language.is_empty() {
        Some(MISSING_LANGUAGE_MESSAGE)
    } else {
        None
    };
    if let Some(message) = invalid {
        return CodeGenerationResponse {
            ok: false,
            query: query.to_string(),
            language: language.to_string(),
            generated_code: String::new(),
            notes: vec![message.to_string()],
        };
    }

    let (generated_code, note) =
        match generate_usable(generator, model, &code_prompt(language, query)) {
            Ok(code) => (code, "Code generated successfully".to_string()),
            Err(err) => {
                log::warn!("code generation fell back to stub for {language}: {err}");
                (fallback_code(language, query), fallback_note(&err))
            }
        };

    CodeGenerationResponse {
        ok: true,
        query: query.to_string(),
        language: language.to_string(),
        generated_code,
        notes: vec![note],
    }
}
