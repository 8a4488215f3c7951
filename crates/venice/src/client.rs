//! HTTP client for the Venice.ai text and image endpoints.
//!
//! Wraps `POST /api/v1/chat/completions` (OpenAI-style chat envelope)
//! and `POST /api/v1/image/generate` using [`reqwest`]. Every call
//! carries the bearer credential configured at process start.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::VeniceError;
use crate::provider::GenerationProvider;

/// Default maximum tokens for a text completion.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default sampling temperature for a text completion.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Default style preset for image generation.
pub const DEFAULT_IMAGE_STYLE: &str = "realistic";

/// Default image edge length in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 1024;

/// Venice connection configuration, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct VeniceConfig {
    /// Base HTTP URL, e.g. `https://api.venice.ai`.
    pub base_url: String,
    /// Bearer credential. An empty string is accepted; calls will then
    /// fail authentication at the provider.
    pub api_key: String,
    /// Chat model for text completions.
    pub text_model: String,
    /// Model for image generation.
    pub image_model: String,
}

/// Options for a single text completion call.
#[derive(Debug, Clone)]
pub struct TextOptions {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl TextOptions {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Options for a single image generation call.
#[derive(Debug, Clone)]
pub struct ImageOptions {
    pub prompt: String,
    pub style: String,
    pub width: u32,
    pub height: u32,
}

impl ImageOptions {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: DEFAULT_IMAGE_STYLE.to_string(),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// HTTP client for the Venice API.
#[derive(Clone)]
pub struct VeniceClient {
    client: reqwest::Client,
    config: VeniceConfig,
}

impl VeniceClient {
    /// Create a client from connection configuration.
    ///
    /// Generative calls are slow, so the underlying client uses a
    /// 120-second timeout.
    pub fn new(config: VeniceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: VeniceConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`VeniceError::Api`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, VeniceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(VeniceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn post_json<Req: Serialize, Resp: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, VeniceError> {
        let response = self
            .client
            .post(format!("{}{}", self.config.base_url, path))
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| VeniceError::Request(e.to_string()))?;

        let response = Self::ensure_success(response).await?;
        response
            .json::<Resp>()
            .await
            .map_err(|e| VeniceError::Request(e.to_string()))
    }
}

#[async_trait]
impl GenerationProvider for VeniceClient {
    async fn text_completion(&self, options: TextOptions) -> Result<String, VeniceError> {
        let request = ChatRequest {
            model: &self.config.text_model,
            messages: vec![ChatMessage {
                role: "user",
                content: options.prompt,
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        tracing::debug!(
            model = %self.config.text_model,
            max_tokens = options.max_tokens,
            "requesting text completion"
        );

        let response: ChatResponse = self.post_json("/api/v1/chat/completions", &request).await?;

        // An envelope without a usable choice degrades to an empty
        // string rather than an error.
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    async fn image_generation(&self, options: ImageOptions) -> Result<Option<String>, VeniceError> {
        let request = ImageRequest {
            prompt: options.prompt,
            style_preset: options.style,
            width: options.width,
            height: options.height,
            model: &self.config.image_model,
        };

        tracing::debug!(
            model = %self.config.image_model,
            width = options.width,
            height = options.height,
            "requesting image generation"
        );

        let response: ImageResponse = self.post_json("/api/v1/image/generate", &request).await?;

        // Prefer the hosted URL; fall back to the inline base64 payload.
        Ok(response
            .images
            .into_iter()
            .next()
            .and_then(|image| image.url.or(image.b64_json)))
    }
}

// ============================================================================
// Venice API wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    prompt: String,
    style_preset: String,
    width: u32,
    height: u32,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    images: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    b64_json: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_single_user_message() {
        let request = ChatRequest {
            model: "llama-3.3-70b",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello".into(),
            }],
            max_tokens: 500,
            temperature: 0.8,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn chat_response_tolerates_missing_pieces() {
        let empty: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.choices.is_empty());

        let no_content: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert!(no_content.choices[0].message.content.is_none());
    }

    #[test]
    fn image_response_prefers_url_over_inline_payload() {
        let response: ImageResponse = serde_json::from_str(
            r#"{"images":[{"url":"https://img.example/a.png","b64_json":"AAAA"}]}"#,
        )
        .unwrap();
        let first = response
            .images
            .into_iter()
            .next()
            .and_then(|image| image.url.or(image.b64_json));
        assert_eq!(first.as_deref(), Some("https://img.example/a.png"));
    }
}
