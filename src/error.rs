use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoFavoritesError {
    #[error("GitHub API returned status {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Widget error: {0}")]
    WidgetError(String),
}

/// Which side of a search attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The API answered, but with a non-success status.
    HttpStatus,
    /// The request never completed, or its payload could not be decoded.
    TransportOrParse,
    /// Local setup or plumbing problems that never reach the user as an alert.
    Local,
}

impl RepoFavoritesError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RepoFavoritesError::HttpStatus(_) => FailureKind::HttpStatus,
            RepoFavoritesError::NetworkError(_) | RepoFavoritesError::JsonError(_) => {
                FailureKind::TransportOrParse
            }
            _ => FailureKind::Local,
        }
    }

    /// Text shown to the user when a search attempt fails.
    pub fn alert_message(&self) -> String {
        match self {
            RepoFavoritesError::HttpStatus(status) => format!("response.status = {}", status),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoFavoritesError>;
