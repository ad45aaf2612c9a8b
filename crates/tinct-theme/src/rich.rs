//! Completion of partial rich-color intents.

use tinct_color::{alpha, contrast_ratio, darken, lighten};

use crate::error::{ThemeError, ThemeResult};
use crate::input::RichColorInput;
use crate::model::RichColor;
use crate::palette;

/// Opacity of the derived `transparent` attribute.
const TRANSPARENT_ALPHA: f64 = 0.15;
/// Opacity of the derived `border_transparent` attribute.
const BORDER_TRANSPARENT_ALPHA: f64 = 0.25;

/// Scalars and references the derivation runs against.
#[derive(Debug, Clone, Copy)]
pub struct DeriveContext<'a> {
    /// Whether shades move toward black (light mode) or white (dark mode).
    pub light_mode: bool,
    /// Fractional shift applied when deriving `shade`.
    pub tonal_offset: f64,
    /// Minimum contrast ratio for `contrast_text` selection.
    pub contrast_threshold: f64,
    /// Opaque surface translucent mains are read against.
    pub surface: &'a str,
}

/// Complete a partial intent into a fully populated [`RichColor`].
///
/// Only absent fields are filled, in an order that matters: `text` falls
/// back to `main` and `border` to `text`, so supplying `text` alone also
/// shapes `border`. `shade` moves against the mode's background direction,
/// `transparent`/`border_transparent` are fixed alpha steps, and
/// `contrast_text` picks the maximum-contrast reference that clears the
/// threshold against `main`.
///
/// # Errors
///
/// Returns [`ThemeError::MissingMain`] when the intent has no `main`, or
/// [`ThemeError::Color`] when a supplied color string cannot be parsed.
pub fn derive(name: &str, intent: RichColorInput, ctx: &DeriveContext<'_>) -> ThemeResult<RichColor> {
    let Some(main) = intent.main else {
        return Err(ThemeError::MissingMain {
            intent: name.to_string(),
        });
    };
    let text = intent.text.unwrap_or_else(|| main.clone());
    let border = intent.border.unwrap_or_else(|| text.clone());
    let shade = match intent.shade {
        Some(value) => value,
        None if ctx.light_mode => darken(&main, ctx.tonal_offset)
            .map_err(|source| ThemeError::color("rich.shade", source))?,
        None => lighten(&main, ctx.tonal_offset)
            .map_err(|source| ThemeError::color("rich.shade", source))?,
    };
    let transparent = match intent.transparent {
        Some(value) => value,
        None => alpha(&main, TRANSPARENT_ALPHA)
            .map_err(|source| ThemeError::color("rich.transparent", source))?,
    };
    let contrast_text = match intent.contrast_text {
        Some(value) => value,
        None => contrast_text_for(&main, ctx)?.to_string(),
    };
    let border_transparent = match intent.border_transparent {
        Some(value) => value,
        None => alpha(&border, BORDER_TRANSPARENT_ALPHA)
            .map_err(|source| ThemeError::color("rich.border_transparent", source))?,
    };
    Ok(RichColor {
        name: name.to_string(),
        main,
        shade,
        text,
        border,
        transparent,
        border_transparent,
        contrast_text,
    })
}

/// Pick the maximum-contrast reference for a background.
///
/// The on-dark reference (white) is preferred whenever it clears the
/// threshold; otherwise the on-light reference (black) is used.
///
/// # Errors
///
/// Returns [`ThemeError::Color`] when `background` cannot be parsed.
pub fn contrast_text_for(background: &str, ctx: &DeriveContext<'_>) -> ThemeResult<&'static str> {
    let ratio = contrast_ratio(palette::MAX_CONTRAST_ON_DARK, background, Some(ctx.surface))
        .map_err(|source| ThemeError::color("rich.contrast_text", source))?;
    if ratio >= ctx.contrast_threshold {
        Ok(palette::MAX_CONTRAST_ON_DARK)
    } else {
        Ok(palette::MAX_CONTRAST_ON_LIGHT)
    }
}
