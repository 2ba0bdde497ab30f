//! Error types shared by the inbox core, the transport and the renderers.

use thiserror::Error;

/// Errors surfaced by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote site answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The landing page or webmail script lacked a session token.
    #[error("session error: {0}")]
    Session(String),

    /// The configured base URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// There is nothing to display.
    #[error("inbox is empty")]
    EmptyInbox,

    /// Machine-readable rendering failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
