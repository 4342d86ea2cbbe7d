//! Unit test generation with template fallback.

use crate::domain::{GenerateTestsRequest, GenerateTestsResponse};
use crate::fallback::fallback_tests;
use crate::generator::{Generator, fallback_note, generate_usable};
use crate::prompts::tests_prompt;
use crate::quality::EMPTY_CODE_MESSAGE;

/// Message returned when the language is missing.
pub const MISSING_LANGUAGE_MESSAGE: &str = "Error: Language must be specified";
/// Message returned when the framework is missing.
pub const MISSING_FRAMEWORK_MESSAGE: &str = "Error: Framework must be specified";

/// Generate unit tests, substituting a template when the generator fails.
///
/// Never fails: validation problems come back with `ok: false`, generator
/// problems with `ok: true` and a fallback note.
pub fn generate_tests<G: Generator + ?Sized>(
    generator: &G,
    model: &str,
    request: &GenerateTestsRequest,
) -> GenerateTestsResponse {
    let language = request.language.trim();
    let framework = request.framework.trim();
    if let Some(message) = validate(request) {
        return GenerateTestsResponse {
            ok: false,
            tests: String::new(),
            language: language.to_string(),
            framework: framework.to_string(),
            notes: vec![message.to_string()],
        };
    }

    let prompt = tests_prompt(request.code.trim(), language, framework);
    let (tests, note) = match generate_usable(generator, model, &prompt) {
        Ok(tests) => {
            log::debug!("generated {language}/{framework} tests with {model}");
            (tests, "Tests generated successfully".to_string())
        }
        Err(err) => {
            log::warn!("test generation fell back to template for {language}/{framework}: {err}");
            (fallback_tests(language, framework), fallback_note(&err))
        }
    };

    GenerateTestsResponse {
        ok: true,
        tests,
        language: language.to_string(),
        framework: framework.to_string(),
        notes: vec![note],
    }
}

fn validate(request: &GenerateTestsRequest) -> Option<&'static str> {
    if request.code.trim().is_empty() {
        return Some(EMPTY_CODE_MESSAGE);
    }
    if request.language.trim().is_empty() {
        return Some(MISSING_LANGUAGE_MESSAGE);
    }
    if request.framework.trim().is_empty() {
        return Some(MISSING_FRAMEWORK_MESSAGE);
    }
    None
}
