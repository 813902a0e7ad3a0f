//! Error types for the Bing Speech client library.

use thiserror::Error;

/// Error type for speech client operations.
///
/// Each variant names the operation that failed and carries the underlying
/// [`Cause`].
#[derive(Error, Debug)]
pub enum Error {
    /// The token endpoint was unreachable or rejected the subscription key.
    #[error("Token issuance failed: {0}")]
    Auth(#[source] Cause),

    /// Voice recognition request failed.
    #[error("Voice recognition failed: {0}")]
    Recognition(#[source] Cause),

    /// Voice synthesis request failed.
    #[error("Voice synthesis failed: {0}")]
    Synthesis(#[source] Cause),
}

impl Error {
    /// Returns the underlying cause.
    pub fn cause(&self) -> &Cause {
        match self {
            Error::Auth(cause) | Error::Recognition(cause) | Error::Synthesis(cause) => cause,
        }
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self.cause(), Cause::Timeout)
    }
}

/// The original reason an operation failed.
#[derive(Error, Debug)]
pub enum Cause {
    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within its timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The token endpoint answered with an empty body.
    #[error("Token endpoint returned an empty token")]
    EmptyToken,

    /// No voice font is registered for the requested locale and gender.
    #[error("No voice font for locale '{locale}' and gender '{gender}'")]
    VoiceFontNotFound {
        /// Requested locale.
        locale: String,
        /// Requested gender.
        gender: String,
    },
}
