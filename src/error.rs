use thiserror::Error;

/// Errors that can occur while importing drink recipes
#[derive(Error, Debug)]
pub enum ImportError {
    /// No title rule matched, the page is not a usable recipe
    #[error("Recipe title not found")]
    TitleNotFound,

    /// Failed to fetch a page or an image
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Filesystem error while writing images or output files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or parse the records file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Refused to write an output file without records
    #[error("No recipes to save")]
    NothingToSave,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
