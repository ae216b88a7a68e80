use thiserror::Error;

/// Errors that can occur while scraping a recipe page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport failure while fetching the page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The page answered with a non-success status
    #[error("Failed to fetch {url}: server returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Fetched bytes could not be turned into a document
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// Malformed request body
    #[error("{0}")]
    Decode(serde_json::Error),

    /// Recipe could not be encoded as JSON
    #[error("Failed to serialize recipe: {0}")]
    Serialization(serde_json::Error),

    /// A configured selector string is not valid CSS
    #[error("Invalid selector for {field} ({selector}): {message}")]
    Selector {
        field: &'static str,
        selector: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// True for transport failures and non-success statuses
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, ScrapeError::Fetch(_) | ScrapeError::Status { .. })
    }
}
