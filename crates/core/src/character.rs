use serde::{Deserialize, Serialize};

/// A generated character profile.
///
/// Parsed from the JSON object the text model was asked to produce. When
/// no parseable object can be found in the raw response,
/// [`Character::fallback`] builds a structurally valid entity instead —
/// that path must never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub backstory: String,
    /// Personality traits. The model is asked for three but nothing
    /// guarantees the list is present or non-empty.
    #[serde(default)]
    pub traits: Vec<String>,
    pub appearance: String,
    /// Portrait image URL (or inline base64 payload). Absent when the
    /// image step failed or returned nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portrait_url: Option<String>,
}

impl Character {
    /// Fallback entity for unparseable model output: sentinel name, the
    /// raw response as the backstory, and the user's own description as
    /// the appearance.
    pub fn fallback(raw: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: "Unknown".to_string(),
            backstory: raw.into(),
            traits: Vec::new(),
            appearance: description.into(),
            portrait_url: None,
        }
    }
}
