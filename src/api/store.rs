use std::fmt;

use async_trait::async_trait;

use super::types::Todo;

/// Errors that can occur talking to the remote endpoint.
/// Variants separate transport failures from server-side rejections.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint returned a non-success status.
    Api { status: u16, message: String },
    /// Failed to parse the endpoint's response body.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The remote side of the list: one read, one write.
///
/// Toggle and delete never go remote, so the trait stays this small.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches up to `limit` todos, in the order the endpoint returns them.
    async fn fetch(&self, limit: u32) -> Result<Vec<Todo>, ApiError>;

    /// Creates `todo` remotely. The response body is ignored.
    async fn create(&self, todo: &Todo) -> Result<(), ApiError>;
}
