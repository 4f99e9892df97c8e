//! Error types for the content API client.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Content API errors.
///
/// Cloneable so views can keep a failed fetch in reactive state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or invalid access token.
    #[error("Unauthorized: check the CMS access token")]
    Unauthorized,

    /// No story exists for the slug.
    #[error("Story not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The CMS plugin was installed without the API extension.
    #[error("Content API extension is not enabled")]
    ApiDisabled,
}

impl ApiError {
    /// Map a non-success status code to an error.
    pub fn from_status(status: u16, slug: &str, url: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound(slug.to_string()),
            _ => Self::Status {
                status,
                url: url.to_string(),
            },
        }
    }
}
