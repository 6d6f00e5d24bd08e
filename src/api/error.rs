//! Backend error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The query succeeded but no row matched.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The call needs a signed-in user.
    #[error("Sign in required")]
    Unauthenticated,

    #[error("Backend URL is not configured")]
    NotConfigured,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
