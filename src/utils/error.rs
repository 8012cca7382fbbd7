use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input object is empty: {object}")]
    EmptyInput { object: String },

    #[error("Input object is not valid UTF-8: {object}")]
    InvalidEncoding { object: String },

    #[error("Storage operation failed: {message}")]
    StorageError { message: String },

    #[error("Sink insert failed: {message}")]
    SinkError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
