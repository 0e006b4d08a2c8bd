use thiserror::Error;

/// Error raised when a format pattern is malformed.
///
/// Positions are character indices into the pattern, so the message points at
/// the construct that needs fixing.
///
/// # Examples
/// ```
/// use bytesize_fmt::{ByteSize, FormatError};
///
/// let err = ByteSize::from_bytes(10).format("f 'UU").unwrap_err();
/// assert_eq!(err, FormatError::UnterminatedQuote { quote: '\'', position: 2 });
/// assert_eq!(
///     err.to_string(),
///     "unterminated quoted literal: ' opened at position 2 is never closed"
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A `'` or `"` literal ran to the end of the pattern.
    #[error("unterminated quoted literal: {quote} opened at position {position} is never closed")]
    UnterminatedQuote { quote: char, position: usize },

    /// The pattern ends in a `\` with nothing after it.
    #[error("dangling escape: \\ at position {position} has nothing to escape")]
    DanglingEscape { position: usize },
}

/// Error raised when text does not name a known [`Unit`](crate::Unit).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit: {0:?}")]
pub struct ParseUnitError(pub String);

/// Errors turning command line arguments into a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown locale: {0:?} (expected one of invariant, en, de, fr, ch)")]
    UnknownLocale(String),

    #[error("invalid unit: {0}")]
    InvalidUnit(#[from] ParseUnitError),

    #[error("invalid pattern: {0}")]
    Format(#[from] FormatError),
}
