use std::fmt;

/// Errors raised by scenario generation and economic lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Generation parameters violate their constraints (wrong vector length,
    /// proportions not summing to 1.0, value out of its valid range).
    InvalidParameters(String),
    /// A lookup key is outside its enumeration, or a distance is outside
    /// the loss table's domain.
    OutOfRange(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(msg) => write!(f, "invalid parameters: {msg}"),
            Error::OutOfRange(msg) => write!(f, "out of range: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
