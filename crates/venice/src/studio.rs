//! Composite generation operations.
//!
//! Each operation is a fixed recipe: one text completion, then (where
//! the operation has an image) one dependent image generation, executed
//! sequentially. A failed text step propagates as an error; a failed
//! image step degrades the result instead of aborting it.

use std::sync::Arc;

use quillquest_core::{extract, prompts, Character, Continuation, ScenePainting, World, WritingPrompt};

use crate::client::{ImageOptions, TextOptions};
use crate::error::VeniceError;
use crate::provider::GenerationProvider;

/// Maximum tokens for operations that ask the model for a JSON object
/// (character and world profiles, story continuations).
const STRUCTURED_MAX_TOKENS: u32 = 800;

/// Outcome of a composite operation whose image step is best-effort.
#[derive(Debug)]
pub enum Generated<T> {
    /// Both steps succeeded (the image may still be absent if the
    /// provider returned none).
    Complete(T),
    /// The text step succeeded but the image step failed; `value` has no
    /// image and `image_error` records why.
    Degraded {
        value: T,
        image_error: VeniceError,
    },
}

impl<T> Generated<T> {
    /// Unwrap the entity, discarding degradation information.
    pub fn into_value(self) -> T {
        match self {
            Generated::Complete(value) => value,
            Generated::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Generated::Degraded { .. })
    }
}

/// Domain-level generation operations over a [`GenerationProvider`].
pub struct StoryStudio {
    provider: Arc<dyn GenerationProvider>,
}

impl StoryStudio {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Generate a writing prompt, optionally genre-flavored, and a
    /// best-effort inspiration image for its opening.
    pub async fn writing_prompt(
        &self,
        genre: Option<&str>,
    ) -> Result<Generated<WritingPrompt>, VeniceError> {
        let prompt = self
            .provider
            .text_completion(TextOptions::new(prompts::writing_prompt(genre)))
            .await?;

        let image = self
            .provider
            .image_generation(ImageOptions::new(prompts::prompt_illustration(&prompt)))
            .await;

        Ok(attach(
            WritingPrompt {
                prompt,
                image_url: None,
            },
            image,
            |value, url| value.image_url = url,
        ))
    }

    /// Generate a character profile and a best-effort portrait.
    ///
    /// The model is asked for JSON; unparseable output becomes a
    /// fallback entity, never an error. The portrait prompt uses the
    /// (parsed or fallback) appearance field.
    pub async fn create_character(
        &self,
        description: &str,
    ) -> Result<Generated<Character>, VeniceError> {
        let raw = self
            .provider
            .text_completion(
                TextOptions::new(prompts::character_profile(description))
                    .max_tokens(STRUCTURED_MAX_TOKENS),
            )
            .await?;

        let character = match extract::parse_embedded::<Character>(&raw) {
            Some(character) => character,
            None => Character::fallback(raw, description),
        };

        let portrait = self
            .provider
            .image_generation(
                ImageOptions::new(prompts::character_portrait(&character.appearance))
                    .size(512, 512),
            )
            .await;

        Ok(attach(character, portrait, |value, url| {
            value.portrait_url = url
        }))
    }

    /// Rewrite a scene description vividly and illustrate it.
    ///
    /// The illustration uses the user's original wording, not the
    /// rewrite.
    pub async fn paint_scene(
        &self,
        description: &str,
    ) -> Result<Generated<ScenePainting>, VeniceError> {
        let vivid = self
            .provider
            .text_completion(TextOptions::new(prompts::scene_rewrite(description)))
            .await?;

        let image = self
            .provider
            .image_generation(ImageOptions::new(prompts::scene_illustration(description)))
            .await;

        Ok(attach(
            ScenePainting {
                description: vivid,
                image_url: None,
            },
            image,
            |value, url| value.image_url = url,
        ))
    }

    /// Generate a world profile and a best-effort landscape.
    ///
    /// Same JSON-or-fallback policy as [`Self::create_character`]; the
    /// landscape prompt uses the parsed (or fallback) description.
    pub async fn create_world(&self, concept: &str) -> Result<Generated<World>, VeniceError> {
        let raw = self
            .provider
            .text_completion(
                TextOptions::new(prompts::world_profile(concept))
                    .max_tokens(STRUCTURED_MAX_TOKENS),
            )
            .await?;

        let world = match extract::parse_embedded::<World>(&raw) {
            Some(world) => world,
            None => World::fallback(raw),
        };

        let landscape = self
            .provider
            .image_generation(ImageOptions::new(prompts::world_landscape(
                &world.description,
            )))
            .await;

        Ok(attach(world, landscape, |value, url| value.image_url = url))
    }

    /// Continue a story, optionally steered in a reader-chosen
    /// direction. No image step.
    pub async fn continue_story(
        &self,
        story_text: &str,
        direction: Option<&str>,
    ) -> Result<Continuation, VeniceError> {
        let raw = self
            .provider
            .text_completion(
                TextOptions::new(prompts::story_continuation(story_text, direction))
                    .max_tokens(STRUCTURED_MAX_TOKENS),
            )
            .await?;

        Ok(match extract::parse_embedded::<Continuation>(&raw) {
            Some(continuation) => continuation,
            None => Continuation::fallback(raw),
        })
    }
}

/// Fold an image-step outcome into the entity: a produced URL is
/// attached, an absent image leaves the field unset, and a failure
/// degrades the result without aborting it.
fn attach<T>(
    mut value: T,
    image: Result<Option<String>, VeniceError>,
    set: impl FnOnce(&mut T, Option<String>),
) -> Generated<T> {
    match image {
        Ok(url) => {
            set(&mut value, url);
            Generated::Complete(value)
        }
        Err(image_error) => {
            tracing::warn!(error = %image_error, "image step failed; returning result without image");
            Generated::Degraded { value, image_error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;
    use assert_matches::assert_matches;

    fn studio_with(mock: Arc<MockProvider>) -> StoryStudio {
        StoryStudio::new(mock)
    }

    #[tokio::test]
    async fn character_round_trips_model_json() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text(
            r#"{"name":"Mara","backstory":"Ex-cop.","traits":["cynical"],"appearance":"tall, scarred"}"#,
        );
        mock.push_image_url("https://img.example/mara.png");

        let studio = studio_with(Arc::clone(&mock));
        let generated = studio.create_character("a weary detective").await.unwrap();

        assert_matches!(&generated, Generated::Complete(_));
        let character = generated.into_value();
        assert_eq!(character.name, "Mara");
        assert_eq!(character.portrait_url.as_deref(), Some("https://img.example/mara.png"));

        // The portrait prompt is built from the parsed appearance.
        assert!(mock.image_prompts()[0].contains("tall, scarred"));
    }

    #[tokio::test]
    async fn character_falls_back_when_model_rambles() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text("I would love to help but here is prose instead.");
        mock.push_image_none();

        let studio = studio_with(Arc::clone(&mock));
        let character = studio
            .create_character("a weary detective")
            .await
            .unwrap()
            .into_value();

        assert_eq!(character.name, "Unknown");
        assert_eq!(character.backstory, "I would love to help but here is prose instead.");
        assert_eq!(character.appearance, "a weary detective");
        assert!(character.traits.is_empty());
    }

    #[tokio::test]
    async fn image_failure_degrades_instead_of_aborting() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text("A lighthouse keeper finds a door in the sea.");
        mock.push_image_error(VeniceError::Request("connection reset".into()));

        let studio = studio_with(Arc::clone(&mock));
        let generated = studio.writing_prompt(Some("fantasy")).await.unwrap();

        assert_matches!(&generated, Generated::Degraded { .. });
        let prompt = generated.into_value();
        assert_eq!(prompt.prompt, "A lighthouse keeper finds a door in the sea.");
        assert!(prompt.image_url.is_none());
    }

    #[tokio::test]
    async fn absent_image_is_complete_not_degraded() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text("A quiet harbor at dusk, heavy with fog.");
        mock.push_image_none();

        let studio = studio_with(Arc::clone(&mock));
        let generated = studio.paint_scene("a harbor at dusk").await.unwrap();

        assert!(!generated.is_degraded());
        assert!(generated.into_value().image_url.is_none());
    }

    #[tokio::test]
    async fn scene_illustration_uses_the_original_description() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text("The harbor breathes fog over black water.");
        mock.push_image_url("https://img.example/scene.png");

        let studio = studio_with(Arc::clone(&mock));
        studio.paint_scene("a harbor at dusk").await.unwrap();

        let image_prompts = mock.image_prompts();
        assert!(image_prompts[0].contains("a harbor at dusk"));
        assert!(!image_prompts[0].contains("breathes fog"));
    }

    #[tokio::test]
    async fn text_failure_propagates() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text_error(VeniceError::Api {
            status: 401,
            body: "bad key".into(),
        });

        let studio = studio_with(Arc::clone(&mock));
        let error = studio.create_world("floating islands").await.unwrap_err();

        assert_matches!(error, VeniceError::Api { status: 401, .. });
        // The dependent image step never ran.
        assert_eq!(mock.image_calls(), 0);
    }

    #[tokio::test]
    async fn continuation_parses_suggestions() {
        let mock = Arc::new(MockProvider::new());
        mock.push_text(
            r#"{"continuation":"The door creaked.","suggestions":["a storm hits","a stranger knocks"]}"#,
        );

        let studio = studio_with(Arc::clone(&mock));
        let continuation = studio.continue_story("It was a dark night.", Some("horror")).await.unwrap();

        assert_eq!(continuation.continuation, "The door creaked.");
        assert_eq!(
            continuation.suggestions.as_deref(),
            Some(["a storm hits".to_string(), "a stranger knocks".to_string()].as_slice())
        );
        assert_eq!(mock.image_calls(), 0);
    }
}
