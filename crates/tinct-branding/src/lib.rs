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

//! Remote brand-override acquisition for the Tinct token engine.
//!
//! Layout: `model.rs` (wire document with sentinel-aware decoding),
//! `endpoint.rs` (settings URL and Basic-Authentication credentials resolved
//! from the environment), `loader.rs` (single-flight fetch with a memoized,
//! process-lifetime outcome).

pub mod endpoint;
pub mod error;
pub mod loader;
pub mod model;

pub use endpoint::{
    DEFAULT_BASIC_AUTH, DEFAULT_SETTINGS_URL, DEFAULT_TIMEOUT, ENV_SETTINGS_AUTH,
    ENV_SETTINGS_URL, SETTINGS_PATH, SettingsEndpoint,
};
pub use error::{BrandingError, BrandingResult};
pub use loader::BrandLoader;
pub use model::{BrandOverride, ColorGroup, GradientOverride, NOT_SET};
