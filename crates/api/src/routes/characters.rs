use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use quillquest_core::Character;
use serde::Deserialize;

use crate::body::Lenient;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for `POST /api/characters`.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterRequest {
    pub description: Option<String>,
}

impl CharacterRequest {
    /// Required-field validation, run before any provider call.
    fn validate(self) -> Result<String, ApiError> {
        match self.description {
            Some(description) if !description.trim().is_empty() => Ok(description),
            _ => Err(ApiError::BadRequest("Description is required".into())),
        }
    }
}

/// POST /api/characters — generate a character profile with a
/// best-effort portrait.
async fn generate(
    State(state): State<AppState>,
    Lenient(body): Lenient<CharacterRequest>,
) -> ApiResult<Json<Character>> {
    let description = body.validate()?;

    let generated = state
        .studio
        .create_character(&description)
        .await
        .map_err(|e| ApiError::generation("generate character", e))?;

    Ok(Json(generated.into_value()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/characters", post(generate))
}
