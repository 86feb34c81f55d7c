use thiserror::Error;

/// Main error type for BER-TLV decoding operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("Empty input: expected at least one TLV object")]
    EmptyInput,

    #[error("Truncated input: need {needed} more byte(s), have {available}")]
    TruncatedInput { needed: usize, available: usize },

    #[error("Malformed length: {0}")]
    MalformedLength(String),
}

/// Result type alias for BER-TLV decoding operations
pub type TlvResult<T> = Result<T, TlvError>;
