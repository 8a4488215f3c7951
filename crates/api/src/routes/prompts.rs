use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use quillquest_core::WritingPrompt;
use serde::Deserialize;

use crate::body::Lenient;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for `POST /api/prompts`. Everything is optional.
#[derive(Debug, Default, Deserialize)]
pub struct PromptRequest {
    pub genre: Option<String>,
}

/// POST /api/prompts — generate a writing prompt, optionally flavored
/// by a genre, with a best-effort inspiration image.
async fn generate(
    State(state): State<AppState>,
    Lenient(body): Lenient<PromptRequest>,
) -> ApiResult<Json<WritingPrompt>> {
    // A blank genre means "no genre", same as omitting the field.
    let genre = body.genre.as_deref().filter(|g| !g.trim().is_empty());

    let generated = state
        .studio
        .writing_prompt(genre)
        .await
        .map_err(|e| ApiError::generation("generate writing prompt", e))?;

    Ok(Json(generated.into_value()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/prompts", post(generate))
}
