//! Pure color math for the Tinct token engine.
//!
//! Parses CSS color strings (hex and `rgb()`/`rgba()` notation) into numeric
//! channels and provides the manipulation primitives the theme builder leans
//! on: alpha replacement, tonal lighten/darken, WCAG relative luminance and
//! contrast ratio, and luminance-directed emphasis. Everything here is
//! synchronous and allocation-light; malformed input is rejected with a
//! [`ColorParseError`] rather than propagated as an invalid value.

pub mod error;
pub mod manipulate;
pub mod value;

pub use error::{ColorParseError, ColorResult};
pub use manipulate::{alpha, contrast_ratio, darken, emphasize, lighten, relative_luminance};
pub use value::{ColorFormat, DecomposedColor};
