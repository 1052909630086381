//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::{AppError, AppJson};
use crate::generation::generator::{generate_code, GenerationRequest, GenerationResult};
use crate::state::AppState;

/// POST /generate
///
/// Turns a natural-language instruction (plus optional prior code) into
/// Python code and an explanation.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerationRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    request.validate()?;

    let generator = state.generator()?;
    let result = generate_code(generator, &request).await?;

    Ok(Json(result))
}
