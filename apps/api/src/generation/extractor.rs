//! Response extractor: splits the model's free text into code and explanation.
//!
//! Expected shape (requested by `prompts::RESPONSE_FORMAT`):
//!
//! ~~~text
//! CODE:
//! ```python
//! ...
//! ```
//! EXPLANATION:
//! ...
//! ~~~
//!
//! Anything that does not carry both markers degrades to the fallback result.
//! An opening python fence without a closing fence yields everything after the
//! fence up to the explanation marker.

use crate::generation::generator::GenerationResult;
use crate::generation::prompts::{CLOSING_FENCE, CODE_MARKER, EXPLANATION_MARKER, PYTHON_FENCE};

/// Explanation returned when the response does not follow the marker convention.
pub const FALLBACK_EXPLANATION: &str = "Generated response (format parsing failed)";

/// Parses a raw provider response. Never fails.
pub fn extract(raw_text: &str) -> GenerationResult {
    let Some((code_section, explanation_section)) = split_sections(raw_text) else {
        return GenerationResult {
            code: raw_text.to_string(),
            explanation: FALLBACK_EXPLANATION.to_string(),
        };
    };

    let code_section = code_section.replace(CODE_MARKER, "");
    let code_section = code_section.trim();

    GenerationResult {
        code: fenced_python(code_section).unwrap_or(code_section).to_string(),
        explanation: explanation_section.trim().to_string(),
    }
}

/// Whether `extract` will take the structured path for this text.
pub fn follows_format(raw_text: &str) -> bool {
    split_sections(raw_text).is_some()
}

/// Splits at the first explanation marker, provided both markers are present.
fn split_sections(raw_text: &str) -> Option<(&str, &str)> {
    if !raw_text.contains(CODE_MARKER) {
        return None;
    }
    raw_text.split_once(EXPLANATION_MARKER)
}

/// Body of the first python-fenced block, trimmed. Unclosed fences run to the end.
fn fenced_python(section: &str) -> Option<&str> {
    let (_, after_fence) = section.split_once(PYTHON_FENCE)?;
    let body = after_fence
        .split_once(CLOSING_FENCE)
        .map_or(after_fence, |(body, _)| body);
    Some(body.trim())
}
