use thiserror::Error;

#[derive(Error, Debug)]
pub enum GearForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No keywords configured for {0}")]
    NoKeywordsConfigured(String),

    #[error("Invalid inventory format: {0}")]
    InvalidInventory(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type GfResult<T> = Result<T, GearForgeError>;
