use thiserror::Error;

/// Error type for the fallible edges of the tracker (configuration and I/O).
///
/// Record and limit validation never produce one of these; bad input there is
/// corrected and reported as a [`crate::Diagnostic`] instead.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
