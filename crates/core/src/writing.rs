use serde::{Deserialize, Serialize};

/// A generated writing prompt plus an optional inspiration image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingPrompt {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A story continuation with optional alternative directions.
///
/// Parsed from the JSON object the text model was asked to produce;
/// [`Continuation::fallback`] covers unparseable output. `image_url` is
/// carried for wire compatibility with the frontend but the
/// continue-story operation has no image step, so it stays unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Continuation {
    pub continuation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Continuation {
    /// Fallback for unparseable model output: the raw response becomes
    /// the continuation and no suggestions are offered.
    pub fn fallback(raw: impl Into<String>) -> Self {
        Self {
            continuation: raw.into(),
            suggestions: None,
            image_url: None,
        }
    }
}
