//! Error types for color parsing and manipulation.

use thiserror::Error;

/// Primary error type for color-string operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input did not match any supported color notation.
    #[error("unsupported color notation")]
    UnsupportedNotation {
        /// Offending input string.
        value: String,
    },
    /// Hex input had an invalid length or non-hex digits.
    #[error("invalid hex color")]
    InvalidHex {
        /// Offending input string.
        value: String,
    },
    /// A functional-notation channel was missing, non-numeric, or out of range.
    #[error("invalid color channel")]
    InvalidChannel {
        /// Offending input string.
        value: String,
        /// The channel component that failed to parse.
        channel: String,
    },
    /// An alpha component was non-numeric or outside 0–1.
    #[error("invalid alpha component")]
    InvalidAlpha {
        /// Offending input string.
        value: String,
        /// The alpha component that failed to parse.
        alpha: String,
    },
}

/// Convenience alias for color operations.
pub type ColorResult<T> = Result<T, ColorParseError>;
