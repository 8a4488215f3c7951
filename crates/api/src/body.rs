//! Lenient JSON body extraction.
//!
//! The public contract treats a missing, empty, or malformed JSON body
//! as an empty mapping and leaves it to each route's explicit
//! validation step to reject missing required fields with a
//! field-specific 400. Axum's `Json<T>` extractor would instead reject
//! malformed bodies outright, so routes use [`Lenient<T>`].

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// Extractor that deserializes the request body as JSON, falling back
/// to `T::default()` when the body is absent, unreadable, or not valid
/// JSON for `T`.
pub struct Lenient<T>(pub T);

impl<S, T> FromRequest<S> for Lenient<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(Lenient(serde_json::from_slice(&bytes).unwrap_or_default()))
    }
}
