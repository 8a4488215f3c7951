//! Prompt templates for the five generation operations.
//!
//! Text templates ask the model for either plain prose or a JSON object
//! (which then goes through [`crate::extract`]). Image templates wrap the
//! relevant text in an art-direction framing for the image endpoint.

/// Maximum number of characters of a generated writing prompt that get
/// forwarded to the image endpoint as illustration context.
pub const ILLUSTRATION_EXCERPT_CHARS: usize = 200;

/// Ask for a writing prompt, optionally flavored by a genre.
pub fn writing_prompt(genre: Option<&str>) -> String {
    let genre_text = match genre {
        Some(genre) => format!("in the {genre} genre"),
        None => String::new(),
    };
    format!(
        "Generate a creative and engaging writing prompt {genre_text}.\n\
         The prompt should be specific enough to inspire a story but open-ended enough for creative interpretation.\n\
         Format: Just the prompt text, no explanations or additional text."
    )
}

/// Ask for a character profile as a JSON object.
pub fn character_profile(description: &str) -> String {
    format!(
        "Create a detailed character profile based on this description: \"{description}\"\n\n\
         Respond in JSON format:\n\
         {{\n\
         \x20 \"name\": \"character name\",\n\
         \x20 \"backstory\": \"2-3 sentences about their history\",\n\
         \x20 \"traits\": [\"trait1\", \"trait2\", \"trait3\"],\n\
         \x20 \"appearance\": \"detailed physical description\"\n\
         }}"
    )
}

/// Ask for a vivid single-paragraph rewrite of a scene description.
pub fn scene_rewrite(description: &str) -> String {
    format!(
        "Take this scene description and make it more vivid and atmospheric: \"{description}\"\n\n\
         Provide a single paragraph that brings the scene to life with sensory details."
    )
}

/// Ask for a world/setting profile as a JSON object.
pub fn world_profile(concept: &str) -> String {
    format!(
        "Create a fictional world/setting based on this concept: \"{concept}\"\n\n\
         Respond in JSON format:\n\
         {{\n\
         \x20 \"name\": \"world/setting name\",\n\
         \x20 \"description\": \"2-3 sentences describing the setting\",\n\
         \x20 \"history\": \"brief history of this place\",\n\
         \x20 \"features\": [\"notable feature 1\", \"notable feature 2\", \"notable feature 3\"]\n\
         }}"
    )
}

/// Ask for a story continuation plus alternative directions, as a JSON
/// object.
pub fn story_continuation(story_text: &str, direction: Option<&str>) -> String {
    let direction_text = match direction {
        Some(direction) => format!("\nThe reader wants the story to head in this direction: \"{direction}\"\n"),
        None => String::new(),
    };
    format!(
        "Continue this story in the same voice and tense:\n\n\"{story_text}\"\n{direction_text}\n\
         Respond in JSON format:\n\
         {{\n\
         \x20 \"continuation\": \"2-3 paragraphs continuing the story\",\n\
         \x20 \"suggestions\": [\"alternative direction 1\", \"alternative direction 2\", \"alternative direction 3\"]\n\
         }}"
    )
}

/// Illustration framing for a generated writing prompt. Only the first
/// [`ILLUSTRATION_EXCERPT_CHARS`] characters are forwarded.
pub fn prompt_illustration(prompt_text: &str) -> String {
    let excerpt: String = prompt_text.chars().take(ILLUSTRATION_EXCERPT_CHARS).collect();
    format!(
        "Atmospheric concept art for a story: {excerpt}. Cinematic, dramatic lighting, high quality illustration"
    )
}

/// Portrait framing for a character's appearance.
pub fn character_portrait(appearance: &str) -> String {
    format!(
        "Professional character portrait, {appearance}. High quality, detailed, fantasy art style, dramatic lighting"
    )
}

/// Illustration framing for the user's original scene description.
pub fn scene_illustration(description: &str) -> String {
    format!(
        "Cinematic scene illustration: {description}. Dramatic composition, atmospheric lighting, high quality concept art, detailed environment"
    )
}

/// Landscape framing for a world's description.
pub fn world_landscape(description: &str) -> String {
    format!(
        "Epic landscape concept art: {description}. Sweeping vista, dramatic skies, detailed environment art, cinematic lighting"
    )
}
