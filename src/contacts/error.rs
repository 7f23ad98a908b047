use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Unknown contact type: {0}")]
    UnknownContactType(String),

    #[error("Unparsable timestamp: {0}")]
    UnparsableTimestamp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ContactError>;
