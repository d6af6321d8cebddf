//! Unified error type for triptych.

use thiserror::Error;

/// Errors that can occur during image generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The service returned an error response, even after retries.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the final response.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// No HTTP response was obtained from any attempt.
    #[error("Network error: {0}")]
    Network(String),

    /// A successful response body was not a valid image encoding.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The HTTP client or a request could not be built.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Image format conversion error.
    #[error("Image conversion error: {0}")]
    ImageConversion(String),

    /// No API token configured.
    #[error("No API token. Set HF_API_TOKEN or add it to config file.")]
    MissingToken,

    /// Every endpoint failed to produce an image.
    #[error("No endpoint produced an image")]
    NoImages,
}
