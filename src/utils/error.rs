use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Invalid number parameter: {raw:?}")]
    InvalidNumber { raw: Option<String> },

    #[error("Fact request failed: {0}")]
    FactRequest(#[from] reqwest::Error),

    #[error("Fact provider returned status {status}")]
    FactStatus { status: u16 },

    #[error("Fact provider did not answer within {timeout_ms}ms")]
    FactTimeout { timeout_ms: u64 },

    #[error("Fact provider returned an empty body")]
    EmptyFact,

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
