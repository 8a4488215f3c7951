use serde::Serialize;

/// A visualized scene: the model's vivid rewrite of the user's scene
/// description plus an optional illustration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePainting {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
