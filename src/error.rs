use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("There is no column named {0} in given file")]
    ColumnNotFound(String),

    /// The input ended before a header row could be read.
    #[error("Unexpected end of input: no header row")]
    EndOfInput,

    #[error("Malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported format type: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
