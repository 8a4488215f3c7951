//! Scripted [`GenerationProvider`] for tests.
//!
//! Each expected call is scripted ahead of time; results are handed out
//! FIFO and every received prompt is recorded so tests can assert both
//! "no outbound call happened" and "the call used this prompt". An
//! unscripted call fails loudly instead of inventing a response.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ImageOptions, TextOptions};
use crate::error::VeniceError;
use crate::provider::GenerationProvider;

#[derive(Default)]
pub struct MockProvider {
    text_queue: Mutex<VecDeque<Result<String, VeniceError>>>,
    image_queue: Mutex<VecDeque<Result<Option<String>, VeniceError>>>,
    text_prompts: Mutex<Vec<String>>,
    image_prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful text completion.
    pub fn push_text(&self, text: impl Into<String>) {
        self.text_queue.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Script a failed text completion.
    pub fn push_text_error(&self, error: VeniceError) {
        self.text_queue.lock().unwrap().push_back(Err(error));
    }

    /// Script a successful image generation returning a URL.
    pub fn push_image_url(&self, url: impl Into<String>) {
        self.image_queue
            .lock()
            .unwrap()
            .push_back(Ok(Some(url.into())));
    }

    /// Script a successful image generation that produced no image.
    pub fn push_image_none(&self) {
        self.image_queue.lock().unwrap().push_back(Ok(None));
    }

    /// Script a failed image generation.
    pub fn push_image_error(&self, error: VeniceError) {
        self.image_queue.lock().unwrap().push_back(Err(error));
    }

    /// Number of text completions requested so far.
    pub fn text_calls(&self) -> usize {
        self.text_prompts.lock().unwrap().len()
    }

    /// Number of image generations requested so far.
    pub fn image_calls(&self) -> usize {
        self.image_prompts.lock().unwrap().len()
    }

    /// Prompts received by the text endpoint, in call order.
    pub fn text_prompts(&self) -> Vec<String> {
        self.text_prompts.lock().unwrap().clone()
    }

    /// Prompts received by the image endpoint, in call order.
    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn text_completion(&self, options: TextOptions) -> Result<String, VeniceError> {
        self.text_prompts.lock().unwrap().push(options.prompt);
        self.text_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(VeniceError::Request(
                    "mock: unscripted text completion".to_string(),
                ))
            })
    }

    async fn image_generation(&self, options: ImageOptions) -> Result<Option<String>, VeniceError> {
        self.image_prompts.lock().unwrap().push(options.prompt);
        self.image_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(VeniceError::Request(
                    "mock: unscripted image generation".to_string(),
                ))
            })
    }
}
