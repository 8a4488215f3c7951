use std::sync::Arc;

use quillquest_venice::StoryStudio;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` and immutable
/// for the process lifetime. Handlers share no other state.
#[derive(Clone)]
pub struct AppState {
    /// Composite generation operations over the configured provider.
    pub studio: Arc<StoryStudio>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
