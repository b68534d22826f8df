use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("Check the correct input: {0}")]
    Usage(String),

    #[error("Snapshot is unreadable: {0}")]
    Snapshot(#[from] postcard::Error),

    #[error("JSON snapshot is unreadable: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    /// Line shown to the user when a command handler fails.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(item) if item == "Record" => {
                "Check your name, it isn't in the database, try again".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Failures that must stop the command loop instead of being reported inline.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Snapshot(_) | AppError::Json(_)
        )
    }
}
