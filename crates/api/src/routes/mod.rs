pub mod characters;
pub mod frontend;
pub mod health;
pub mod prompts;
pub mod scenes;
pub mod stories;
pub mod worlds;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /prompts              generate a writing prompt (genre optional)
/// POST /characters           generate a character profile + portrait
/// POST /scenes               rewrite + illustrate a scene
/// POST /worlds               generate a world profile + landscape
/// POST /stories/continue     continue a story (+ alternative directions)
/// GET  /health               fixed status + current timestamp
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(prompts::router())
        .merge(characters::router())
        .merge(scenes::router())
        .merge(worlds::router())
        .merge(stories::router())
}
