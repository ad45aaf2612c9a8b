#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Color design-token derivation for themable UIs.
//!
//! Layout: `palette.rs` (brand reference constants), `model.rs` (complete
//! token-set records), `input.rs` (deep-partial overrides and their merges),
//! `rich.rs` (rich-color derivation), `gradient.rs` (two-stop gradient
//! resolution), `modes.rs` (dark/light seed sets), `custom.rs`
//! (branding-driven seed set), `builder.rs` (orchestration).
//!
//! The entry point is [`create_colors`]: pick a mode, optionally hand in a
//! cached brand override and caller overrides, and receive a token set with
//! every field populated. Derivation is synchronous; prefetching branding
//! data is the caller's responsibility.

pub mod builder;
pub mod custom;
pub mod error;
pub mod gradient;
pub mod input;
pub mod model;
pub mod modes;
pub mod palette;
pub mod rich;

pub use builder::create_colors;
pub use error::{ThemeError, ThemeResult};
pub use gradient::{Gradient, HORIZONTAL_TEMPLATE, VERTICAL_TEMPLATE};
pub use input::{
    ActionColorsInput, BackgroundColorsInput, BorderColorsInput, GradientsInput, RichColorInput,
    TextColorsInput, ThemeColorsInput,
};
pub use model::{
    ActionColors, BackgroundColors, BorderColors, ColorModeSet, Gradients, RichColor, TextColors,
    ThemeColors, ThemeMode,
};
