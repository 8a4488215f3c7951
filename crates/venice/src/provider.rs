use async_trait::async_trait;

use crate::client::{ImageOptions, TextOptions};
use crate::error::VeniceError;

/// The two primitive generation operations.
///
/// [`crate::studio::StoryStudio`] composes everything out of these, so
/// handlers and tests can run against either the real
/// [`crate::client::VeniceClient`] or the scripted
/// [`crate::mock::MockProvider`].
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Run one text completion and return the first choice's content.
    ///
    /// An unexpected-but-successful envelope yields an empty string; a
    /// transport failure or non-2xx status yields an error.
    async fn text_completion(&self, options: TextOptions) -> Result<String, VeniceError>;

    /// Run one image generation and return the first image's URL or
    /// inline payload, `None` when the provider returned no image.
    async fn image_generation(&self, options: ImageOptions) -> Result<Option<String>, VeniceError>;
}
