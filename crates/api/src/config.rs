use quillquest_venice::VeniceConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development, except that
/// the provider credential defaults to an empty string — the server
/// starts, but provider calls will fail authentication until
/// `VENICE_API_KEY` is set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`; generative
    /// calls are slow and each request may make two of them).
    pub request_timeout_secs: u64,
    /// Venice API bearer credential.
    pub venice_api_key: String,
    /// Venice API base URL.
    pub venice_base_url: String,
    /// Chat model for text completions.
    pub venice_text_model: String,
    /// Model for image generation.
    pub venice_image_model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3000`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                    |
    /// | `VENICE_API_KEY`       | empty string             |
    /// | `VENICE_BASE_URL`      | `https://api.venice.ai`  |
    /// | `VENICE_TEXT_MODEL`    | `llama-3.3-70b`          |
    /// | `VENICE_IMAGE_MODEL`   | `fluently-xl`            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let venice_api_key = std::env::var("VENICE_API_KEY").unwrap_or_default();

        let venice_base_url =
            std::env::var("VENICE_BASE_URL").unwrap_or_else(|_| "https://api.venice.ai".into());

        let venice_text_model =
            std::env::var("VENICE_TEXT_MODEL").unwrap_or_else(|_| "llama-3.3-70b".into());

        let venice_image_model =
            std::env::var("VENICE_IMAGE_MODEL").unwrap_or_else(|_| "fluently-xl".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            venice_api_key,
            venice_base_url,
            venice_text_model,
            venice_image_model,
        }
    }

    /// Provider-client view of this configuration.
    pub fn venice(&self) -> VeniceConfig {
        VeniceConfig {
            base_url: self.venice_base_url.clone(),
            api_key: self.venice_api_key.clone(),
            text_model: self.venice_text_model.clone(),
            image_model: self.venice_image_model.clone(),
        }
    }
}
