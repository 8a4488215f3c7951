use serde::{Deserialize, Serialize};

/// A generated world/setting profile.
///
/// Parsed from the JSON object the text model was asked to produce, with
/// [`World::fallback`] covering unparseable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub history: String,
    /// Notable features. May be absent or empty.
    #[serde(default)]
    pub features: Vec<String>,
    /// Landscape image URL (or inline base64 payload). Absent when the
    /// image step failed or returned nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl World {
    /// Fallback entity for unparseable model output: sentinel name and
    /// the raw response as the description.
    pub fn fallback(raw: impl Into<String>) -> Self {
        Self {
            name: "Unknown Realm".to_string(),
            description: raw.into(),
            history: String::new(),
            features: Vec::new(),
            image_url: None,
        }
    }
}
