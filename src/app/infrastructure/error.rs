use thiserror::Error;

use crate::app::domain::page::Page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Translation bundle error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Page not found: {0}")]
    PageUnavailable(Page),

    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },

    #[error("No website URL configured")]
    WebsiteNotConfigured,

    #[error("Could not open browser: {0}")]
    Browser(String),

    #[error("Search error: {0}")]
    Search(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
