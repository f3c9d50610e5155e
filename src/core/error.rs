/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed decimal input (quantity, unit price)
    #[error("Parse error: {0}")]
    Parse(String),

    /// User-correctable input errors (empty fields, bad selection, empty invoice)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// PDF document construction errors
    #[error("Render error: {0}")]
    Render(String),

    /// File system errors while writing documents
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn parse(msg: impl Into<String>) -> Self {
        AppError::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        AppError::Render(msg.into())
    }

    /// Message suitable for an input dialog, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            AppError::Parse(msg)
            | AppError::Validation(msg)
            | AppError::Configuration(msg)
            | AppError::Render(msg) => msg.clone(),
            AppError::Io(err) => err.to_string(),
            AppError::Json(err) => err.to_string(),
        }
    }

    /// True for errors the user fixes by correcting the offending field
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, AppError::Parse(_) | AppError::Validation(_))
    }
}
