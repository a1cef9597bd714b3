use thiserror::Error;

/// Why a remote call could not be used.
///
/// Read operations never surface this as an error; it rides along in
/// [`Fetched::Fallback`](crate::Fetched::Fallback).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),
    #[error("remote answered with status {0}")]
    Status(u16),
    #[error("payload did not decode: {0}")]
    Decode(String),
    #[error("payload broke an invariant: {0}")]
    Invariant(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteError::Status(status.as_u16())
        } else {
            RemoteError::Network(err.to_string())
        }
    }
}

/// The request's scope was cancelled (its view went away) before it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("request cancelled")]
pub struct Cancelled;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
