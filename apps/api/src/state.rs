use std::sync::Arc;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider credential was configured at startup.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Returns the configured provider, or a configuration error for the caller.
    pub fn generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.generator.as_deref().ok_or_else(|| {
            AppError::Configuration("Gemini API key is not configured".to_string())
        })
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }
}
