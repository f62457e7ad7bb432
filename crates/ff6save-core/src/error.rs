use thiserror::Error;

pub type SaveResult<T> = Result<T, SaveError>;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("cipher configuration error: {0}")]
    CipherConfiguration(String),

    #[error("corrupt ciphertext: {len} bytes is not a multiple of the {block_size}-byte block")]
    UnalignedCiphertext { len: usize, block_size: usize },

    #[error("malformed deflate stream: {0}")]
    Decode(#[source] std::io::Error),

    #[error("schema violation: {0}")]
    SchemaViolation(#[from] serde_json::Error),

    #[error("timestamp {value:?} does not match MM/DD/YYYY hh:mm:ss AM/PM: {reason}")]
    TimestampFormat { value: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
