//! Client errors.

use crate::transport::TransportError;
use atomicasset_core::EncodeError;

/// Failure categories a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The filter could not be encoded
    BadInput,
    /// The network round trip failed
    Transport,
    /// The response was not `application/json`
    ContentType,
    /// The service declared `success: false` with a failure status
    Api,
    /// The body did not match the expected shape
    Decode,
    /// The client could not be constructed
    Init,
}

/// Errors returned by [`Client`](crate::Client) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Client construction failed
    #[error("client init error: {0}")]
    Init(String),
    /// Filter encoding failed
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Network failure, message kept as produced by the transport
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Unexpected media type
    #[error("invalid content-type '{found}', expected 'application/json'")]
    ContentType {
        /// Header value as received
        found: String,
        /// HTTP status code of the response
        status: u16,
    },
    /// Failure reported by the service
    #[error("API Error: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the error body
        message: String,
    },
    /// Response body decoding failed
    #[error("{source}")]
    Decode {
        /// Parser error, message kept as is
        #[source]
        source: serde_json::Error,
        /// HTTP status code of the response
        status: u16,
    },
}

impl ClientError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Init(_) => ErrorKind::Init,
            Self::Encode(_) => ErrorKind::BadInput,
            Self::Transport(_) => ErrorKind::Transport,
            Self::ContentType { .. } => ErrorKind::ContentType,
            Self::Api { .. } => ErrorKind::Api,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status code, for errors raised after a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ContentType { status, .. }
            | Self::Api { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}
