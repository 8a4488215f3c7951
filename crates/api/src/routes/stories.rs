use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use quillquest_core::Continuation;
use serde::Deserialize;

use crate::body::Lenient;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for `POST /api/stories/continue`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueRequest {
    pub story_text: Option<String>,
    pub direction: Option<String>,
}

impl ContinueRequest {
    /// Required-field validation, run before any provider call. A blank
    /// direction means "no direction", same as omitting the field.
    fn validate(self) -> Result<(String, Option<String>), ApiError> {
        let story_text = match self.story_text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(ApiError::BadRequest("Story text is required".into())),
        };
        let direction = self.direction.filter(|d| !d.trim().is_empty());
        Ok((story_text, direction))
    }
}

/// POST /api/stories/continue — continue a story, optionally steered in
/// a reader-chosen direction. No image step.
async fn continue_story(
    State(state): State<AppState>,
    Lenient(body): Lenient<ContinueRequest>,
) -> ApiResult<Json<Continuation>> {
    let (story_text, direction) = body.validate()?;

    let continuation = state
        .studio
        .continue_story(&story_text, direction.as_deref())
        .await
        .map_err(|e| ApiError::generation("continue story", e))?;

    Ok(Json(continuation))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/stories/continue", post(continue_story))
}
