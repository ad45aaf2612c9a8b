//! Error types for token derivation.

use thiserror::Error;
use tinct_color::ColorParseError;

/// Primary error type for theme construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A color category's intent lacked its `main` value.
    #[error("missing main color")]
    MissingMain {
        /// Semantic intent that was incomplete.
        intent: String,
    },
    /// A color-math operation received an unparseable color string.
    #[error("color operation failed")]
    Color {
        /// Operation identifier.
        operation: &'static str,
        /// Source parse error.
        source: ColorParseError,
    },
}

impl ThemeError {
    pub(crate) const fn color(operation: &'static str, source: ColorParseError) -> Self {
        Self::Color { operation, source }
    }
}

/// Convenience alias for theme results.
pub type ThemeResult<T> = Result<T, ThemeError>;
