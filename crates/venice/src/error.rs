/// Errors from the Venice API layer.
#[derive(Debug, thiserror::Error)]
pub enum VeniceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("request to Venice failed: {0}")]
    Request(String),

    /// Venice returned a non-2xx status code.
    #[error("Venice API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for server-side logs; never forwarded to
        /// browser clients.
        body: String,
    },
}
