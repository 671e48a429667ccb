use thiserror::Error;

/// Errors raised by the low-level hex conversion.
///
/// The codec operations themselves are total: they catch this error and treat
/// the offending `%` sequence as literal text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not exactly two `[0-9a-fA-F]` characters.
    #[error("invalid hex pair {0:?}, expected two characters from [0-9a-fA-F]")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
