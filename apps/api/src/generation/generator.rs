//! Code generation: orchestrates one request end to end.
//!
//! Flow: build_prompt → TextGenerator::generate → extract → GenerationResult.
//! Provider failures are surfaced as `AppError::Provider` and never retried.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::extractor::{extract, follows_format};
use crate::generation::prompts::build_prompt;
use crate::llm_client::TextGenerator;

/// Request body for code generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Empty string means no prior code.
    #[serde(default)]
    pub existing_code: Option<String>,
    // Accepted for client compatibility; the prompt template always targets Python.
    #[allow(dead_code)]
    #[serde(default)]
    pub language: Option<String>,
}

/// Parsed code / explanation pair returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub code: String,
    pub explanation: String,
}

impl GenerationRequest {
    /// Rejects blank prompts before any provider call is made.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.prompt.trim().is_empty() {
            return Err(AppError::Validation("prompt cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Runs the generation pipeline against the given provider.
pub async fn generate_code(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<GenerationResult, AppError> {
    request.validate()?;

    let prompt = build_prompt(&request.prompt, request.existing_code.as_deref());
    info!(
        "Generating code: prompt_len={}, has_existing_code={}",
        request.prompt.len(),
        request
            .existing_code
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    );

    let raw_text = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Provider(e.to_string()))?;

    if !follows_format(&raw_text) {
        warn!(
            "Provider response did not follow the CODE/EXPLANATION format ({} chars): returning raw text",
            raw_text.len()
        );
    }

    Ok(extract(&raw_text))
}
