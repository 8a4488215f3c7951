use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// The frontend entry page, compiled into the binary so serving it does
/// not depend on the working directory.
const INDEX_HTML: &str = include_str!("../../public/index.html");

/// GET / — serve the single-page frontend.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
