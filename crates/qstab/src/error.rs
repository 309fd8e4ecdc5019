//! Error types for serialization and quoted-string decoding.

use thiserror::Error;

/// Fatal serialization error.
///
/// Anything representable here aborts the current entity and propagates to
/// the stream driver. Value-level problems (unsupported datatypes, snaks
/// that cannot render) are not errors: they drop their own scope silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A claims key that starts with `P` did not parse as a property number.
    #[error("property id {id:?} has no numeric suffix")]
    InvalidPropertyId { id: String },

    /// Writing to the output sink failed. The message is kept as a string
    /// so the error stays comparable.
    #[error("write to output sink failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(err.to_string())
    }
}

/// Error decoding a quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("quoted string does not start and end with '\"'")]
    MissingQuotes,

    #[error("truncated escape sequence at byte {at}")]
    TruncatedEscape { at: usize },

    #[error("invalid escape sequence at byte {at}: expected \\u followed by 4 hex digits")]
    InvalidEscape { at: usize },

    #[error("escape at byte {at} denotes {value:#x}, not a Unicode scalar value")]
    EscapeNotScalar { at: usize, value: u32 },
}
