use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No foods available for the specified dietary restrictions")]
    EmptyCatalog,

    #[error("Food catalog not found (tried: {0})")]
    CatalogNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DietError {
    /// Shorthand for building a validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        DietError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
