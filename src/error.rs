//! Error types for the Beget client.
//!
//! Failures fall into four groups: bad configuration caught while building
//! the client, transport failures from `reqwest`, JSON encoding/decoding
//! problems, and errors Beget itself reported in the response envelope.
//! Match on [`Error::Api`] to tell remote failures apart from the rest.

use crate::ApiErrors;
use thiserror::Error;

/// Errors that can occur during Beget operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL cannot be used to build request URLs.
    ///
    /// Only returned by [`ClientBuilder::build`](crate::ClientBuilder::build).
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// An HTTP request failed.
    ///
    /// This includes network connectivity issues, TLS errors,
    /// timeouts, and non-success HTTP status codes.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The operation input could not be serialized to JSON.
    #[error("failed to encode request input: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not a valid Beget envelope.
    ///
    /// Also returned when Beget reports success but omits `answer.result`.
    #[error("unexpected Beget response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Beget reported one or more errors for the call.
    #[error(transparent)]
    Api(#[from] ApiErrors),
}

impl Error {
    /// Returns true if Beget itself rejected the call.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns the errors Beget reported, if this is an API error.
    pub fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            Self::Api(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
