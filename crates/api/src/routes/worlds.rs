use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use quillquest_core::World;
use serde::Deserialize;

use crate::body::Lenient;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for `POST /api/worlds`.
#[derive(Debug, Default, Deserialize)]
pub struct WorldRequest {
    pub concept: Option<String>,
}

impl WorldRequest {
    /// Required-field validation, run before any provider call.
    fn validate(self) -> Result<String, ApiError> {
        match self.concept {
            Some(concept) if !concept.trim().is_empty() => Ok(concept),
            _ => Err(ApiError::BadRequest("World concept is required".into())),
        }
    }
}

/// POST /api/worlds — generate a world/setting profile with a
/// best-effort landscape image.
async fn generate(
    State(state): State<AppState>,
    Lenient(body): Lenient<WorldRequest>,
) -> ApiResult<Json<World>> {
    let concept = body.validate()?;

    let generated = state
        .studio
        .create_world(&concept)
        .await
        .map_err(|e| ApiError::generation("generate world", e))?;

    Ok(Json(generated.into_value()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/worlds", post(generate))
}
