//! Seam for the external text-generation backend.

use crate::error::{AtumError, Result};

/// A text-generation backend (typically an LLM).
#[cfg_attr(test, mockall::automock)]
pub trait Generator {
    /// Generate text for a prompt using the given model.
    fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}

/// Generator that is never available.
///
/// Used for offline runs so every operation takes its fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

impl Generator for OfflineGenerator {
    fn generate(&self, _model: &str, _prompt: &str) -> Result<String> {
        Err(AtumError::Unavailable("offline mode".to_string()))
    }
}

/// Call the generator and treat blank output as a failure.
///
/// The returned text is trimmed.
pub fn generate_usable<G: Generator + ?Sized>(
    generator: &G,
    model: &str,
    prompt: &str,
) -> Result<String> {
    let output = generator.generate(model, prompt)?;
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(AtumError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}

/// Note attached to responses produced by a fallback template.
pub fn fallback_note(error: &AtumError) -> String {
    format!("Generated using fallback method (LLM error: {error})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn usable_output_is_trimmed() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .with(eq("mistral"), eq("prompt"))
            .times(1)
            .returning(|_, _| Ok("  fn main() {}\n".to_string()));

        let output = generate_usable(&generator, "mistral", "prompt").expect("output");
        assert_eq!(output, "fn main() {}");
    }

    #[test]
    fn blank_output_is_an_error() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Ok(" \n\t".to_string()));

        let error = generate_usable(&generator, "mistral", "prompt").expect_err("blank");
        assert_eq!(error, AtumError::EmptyResponse);
    }

    #[test]
    fn backend_errors_pass_through() {
        let error = generate_usable(&OfflineGenerator, "mistral", "prompt").expect_err("offline");
        assert_eq!(error, AtumError::Unavailable("offline mode".to_string()));
    }

    #[test]
    fn fallback_note_names_the_error() {
        assert_eq!(
            fallback_note(&AtumError::EmptyResponse),
            "Generated using fallback method (LLM error: empty response)"
        );
    }
}
