use thiserror::Error;

/// Error type that captures failures at the persistence and
/// submission boundaries. Wizard operations themselves are total and
/// never produce one of these.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Draft not found: {0}")]
    DraftNotFound(String),
    #[error("Submission rejected: {0}")]
    Submission(String),
}
