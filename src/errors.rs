use thiserror::Error;

/// Error type for the fallible edges around money rendering.
///
/// Rendering itself never fails; these variants come from strict validation,
/// user input parsing and configuration loading.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
