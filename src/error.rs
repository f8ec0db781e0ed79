//! Error types for the Figma toolkit.
//!
//! The extraction and compilation core never fails: malformed or missing data is
//! recovered locally (see the individual modules). The errors defined here come
//! from the collaborators around the core: JSON parsing, the Figma REST API, and
//! the artifact store on disk.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching, parsing or storing design data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level HTTP failure (DNS, TLS, connection reset, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Figma API answered with a non-success status
    #[error("Status {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body (or reason phrase when the body was empty)
        body: String,
    },

    /// An image download answered with a non-success status
    #[error("Failed to download image from {url}: status {status}")]
    Download {
        /// HTTP status code
        status: u16,
        /// Image URL that was requested
        url: String,
    },

    /// No personal access token was configured
    #[error("No Figma access token provided (set FIGMA_TOKEN)")]
    MissingToken,

    /// The given string is neither a file key nor a Figma file URL
    #[error("Invalid Figma file key or URL: '{0}'")]
    InvalidFileKey(String),

    /// A requested subtree root does not exist in the document
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}
