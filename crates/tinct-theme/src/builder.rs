//! Orchestration of one token build.
//!
//! # Design
//! - Resolve the base seed set, then caller scalars, then each section and
//!   intent; nothing here suspends, so a build can run on any thread and a
//!   `custom` request with no cached branding degrades to dark immediately.
//! - Configuration errors (a merged intent with no main, an unparseable
//!   color) abort the build; no partial token set is ever returned.

use tracing::debug;

use tinct_branding::BrandOverride;

use crate::custom;
use crate::error::ThemeResult;
use crate::gradient::{self, Gradient};
use crate::input::{GradientsInput, ThemeColorsInput};
use crate::model::{ColorModeSet, Gradients, ThemeColors, ThemeMode};
use crate::modes;
use crate::rich::{DeriveContext, derive};

/// Build a complete token set from a mode and partial overrides.
///
/// `brand` is whatever override the caller has cached; it is only consulted
/// when [`ThemeMode::Custom`] is requested. Prefetching it is the caller's
/// responsibility — this function never performs I/O.
///
/// # Errors
///
/// Returns [`crate::ThemeError`] when a merged intent lacks `main` or a
/// color string cannot be parsed. Absent branding is not an error: the
/// build falls back to the dark seed set.
pub fn create_colors(
    input: ThemeColorsInput,
    brand: Option<&BrandOverride>,
) -> ThemeResult<ThemeColors> {
    let base = resolve_base(input.mode.unwrap_or_default(), brand);

    let contrast_threshold = input.contrast_threshold.unwrap_or(base.contrast_threshold);
    let hover_factor = input.hover_factor.unwrap_or(base.hover_factor);
    let tonal_offset = input.tonal_offset.unwrap_or(base.tonal_offset);

    let text = input.text.merge_over(&base.text);
    let background = input.background.merge_over(&base.background);
    let border = input.border.merge_over(&base.border);
    let action = input.action.merge_over(&base.action);
    let gradients = resolve_gradients(input.gradients, &base.horizontal, &base.vertical);

    let ctx = DeriveContext {
        light_mode: base.mode.is_light(),
        tonal_offset,
        contrast_threshold,
        surface: &background.primary,
    };
    let primary = derive("primary", input.primary.merge_over(&base.primary), &ctx)?;
    let secondary = derive("secondary", input.secondary.merge_over(&base.secondary), &ctx)?;
    let info = derive("info", input.info.merge_over(&base.info), &ctx)?;
    let error = derive("error", input.error.merge_over(&base.error), &ctx)?;
    let success = derive("success", input.success.merge_over(&base.success), &ctx)?;
    let warning = derive("warning", input.warning.merge_over(&base.warning), &ctx)?;

    Ok(ThemeColors {
        mode: base.mode,
        primary,
        secondary,
        info,
        error,
        success,
        warning,
        text,
        background,
        border,
        action,
        gradients,
        contrast_threshold,
        hover_factor,
        tonal_offset,
    })
}

/// Pick the seed set for the requested mode.
fn resolve_base(mode: ThemeMode, brand: Option<&BrandOverride>) -> ColorModeSet {
    match mode {
        ThemeMode::Dark => modes::dark(),
        ThemeMode::Light => modes::light(),
        ThemeMode::Custom => brand.map_or_else(
            || {
                debug!("custom mode requested without cached branding, using dark seed set");
                modes::dark()
            },
            custom::custom,
        ),
    }
}

/// Resolve base gradients through their templates, then apply overrides.
fn resolve_gradients(
    input: GradientsInput,
    horizontal: &Gradient,
    vertical: &Gradient,
) -> Gradients {
    let resolved = Gradients {
        brand_horizontal: gradient::resolve(gradient::HORIZONTAL_TEMPLATE, horizontal),
        brand_vertical: gradient::resolve(gradient::VERTICAL_TEMPLATE, vertical),
    };
    input.merge_over(&resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RichColorInput;

    #[test]
    fn default_input_builds_dark() -> anyhow::Result<()> {
        let colors = create_colors(ThemeColorsInput::default(), None)?;
        assert_eq!(colors.mode, ThemeMode::Dark);
        assert_eq!(colors.primary.main, crate::palette::BLUE_DARK_MAIN);
        Ok(())
    }

    #[test]
    fn custom_without_branding_falls_back_to_dark() -> anyhow::Result<()> {
        let requested = ThemeColorsInput {
            mode: Some(ThemeMode::Custom),
            ..ThemeColorsInput::default()
        };
        let fallback = create_colors(requested, None)?;
        let dark = create_colors(ThemeColorsInput::default(), None)?;
        assert_eq!(fallback, dark);
        Ok(())
    }

    #[test]
    fn scalar_overrides_feed_derivation() -> anyhow::Result<()> {
        let input = ThemeColorsInput {
            tonal_offset: Some(0.3),
            primary: RichColorInput {
                main: Some("#0073bc".to_string()),
                shade: None,
                ..RichColorInput::default()
            },
            ..ThemeColorsInput::default()
        };
        let colors = create_colors(input, None)?;
        assert!((colors.tonal_offset - 0.3).abs() < f64::EPSILON);
        assert_eq!(colors.primary.shade, tinct_color::lighten("#0073bc", 0.3)?);
        Ok(())
    }

    #[test]
    fn section_overrides_replace_leaves_only() -> anyhow::Result<()> {
        let input = ThemeColorsInput {
            text: crate::input::TextColorsInput {
                primary: Some("#fafafa".to_string()),
                ..crate::input::TextColorsInput::default()
            },
            ..ThemeColorsInput::default()
        };
        let colors = create_colors(input, None)?;
        let dark = create_colors(ThemeColorsInput::default(), None)?;
        assert_eq!(colors.text.primary, "#fafafa");
        assert_eq!(colors.text.secondary, dark.text.secondary);
        Ok(())
    }

    #[test]
    fn gradient_string_overrides_win() -> anyhow::Result<()> {
        let input = ThemeColorsInput {
            gradients: GradientsInput {
                brand_horizontal: Some("linear-gradient(45deg, red, blue)".to_string()),
                ..GradientsInput::default()
            },
            ..ThemeColorsInput::default()
        };
        let colors = create_colors(input, None)?;
        assert_eq!(
            colors.gradients.brand_horizontal,
            "linear-gradient(45deg, red, blue)"
        );
        let dark = create_colors(ThemeColorsInput::default(), None)?;
        assert_eq!(colors.gradients.brand_vertical, dark.gradients.brand_vertical);
        Ok(())
    }
}
