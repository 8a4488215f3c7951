use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use quillquest_core::ScenePainting;
use serde::Deserialize;

use crate::body::Lenient;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for `POST /api/scenes`.
#[derive(Debug, Default, Deserialize)]
pub struct SceneRequest {
    pub description: Option<String>,
}

impl SceneRequest {
    /// Required-field validation, run before any provider call.
    fn validate(self) -> Result<String, ApiError> {
        match self.description {
            Some(description) if !description.trim().is_empty() => Ok(description),
            _ => Err(ApiError::BadRequest("Scene description is required".into())),
        }
    }
}

/// POST /api/scenes — rewrite a scene description vividly and
/// illustrate the original wording.
async fn visualize(
    State(state): State<AppState>,
    Lenient(body): Lenient<SceneRequest>,
) -> ApiResult<Json<ScenePainting>> {
    let description = body.validate()?;

    let generated = state
        .studio
        .paint_scene(&description)
        .await
        .map_err(|e| ApiError::generation("visualize scene", e))?;

    Ok(Json(generated.into_value()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/scenes", post(visualize))
}
