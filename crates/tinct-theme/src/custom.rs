//! Seed set built from a remotely supplied brand override.
//!
//! Every raw leaf resolves independently: a supplied value is used verbatim,
//! an absent one is composed as an alpha step over the registered accent
//! (border leaves use the border accent). The opacity of each step lives in
//! one table below so the mirrored text/border/action paths cannot drift.

use tinct_branding::{BrandOverride, ColorGroup};

use crate::gradient::Gradient;
use crate::input::RichColorInput;
use crate::model::{
    ActionColors, BackgroundColors, BorderColors, ColorModeSet, TextColors, ThemeMode,
};
use crate::palette;

/// Accent channels registered when an override supplies none.
const DEFAULT_BASE_CHANNELS: &str = "255, 255, 255";

/// Alpha steps composed over the accents for absent leaves.
mod steps {
    pub(super) const TEXT_PRIMARY: f64 = 1.0;
    pub(super) const TEXT_SECONDARY: f64 = 0.75;
    pub(super) const TEXT_DISABLED: f64 = 0.5;
    pub(super) const BORDER_WEAK: f64 = 0.12;
    pub(super) const BORDER_MEDIUM: f64 = 0.3;
    pub(super) const BORDER_STRONG: f64 = 0.4;
    pub(super) const ACTION_HOVER: f64 = 0.12;
    pub(super) const ACTION_SELECTED: f64 = 0.08;
    pub(super) const ACTION_FOCUS: f64 = 0.12;
    pub(super) const ACTION_DISABLED_BACKGROUND: f64 = 0.04;
    pub(super) const SECONDARY_MAIN: f64 = 0.16;
    pub(super) const SECONDARY_SHADE: f64 = 0.2;
    pub(super) const SECONDARY_TEXT: f64 = 1.0;
}

/// Use the override leaf, or compose an accent alpha step.
fn from_accent(value: Option<&String>, accent: &str, opacity: f64) -> String {
    value
        .cloned()
        .unwrap_or_else(|| format!("rgba({accent}, {opacity})"))
}

/// Use the override leaf, or a fixed default.
fn or_default(value: Option<&String>, default: &str) -> String {
    value.cloned().unwrap_or_else(|| default.to_string())
}

/// Turn a wire color group into a partial intent with a default main.
///
/// The group's text seeds `contrast_text`: text supplied by a brand is
/// picked for legibility on top of the group's main color.
fn intent_from(group: &ColorGroup, default_main: &str) -> RichColorInput {
    RichColorInput {
        main: Some(or_default(group.main.as_ref(), default_main)),
        shade: group.shade.clone(),
        contrast_text: group.text.clone(),
        ..RichColorInput::default()
    }
}

/// Build the custom seed set from a cached brand override.
#[must_use]
pub fn custom(brand: &BrandOverride) -> ColorModeSet {
    let base = brand
        .base_color
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_CHANNELS.to_string());
    let border_accent = brand.border_color.clone().unwrap_or_else(|| base.clone());

    let text_primary = from_accent(brand.text_primary.as_ref(), &base, steps::TEXT_PRIMARY);
    let text = TextColors {
        secondary: from_accent(brand.text_secondary.as_ref(), &base, steps::TEXT_SECONDARY),
        disabled: from_accent(brand.text_disabled.as_ref(), &base, steps::TEXT_DISABLED),
        link: or_default(brand.text_link.as_ref(), &text_primary),
        max_contrast: palette::WHITE.to_string(),
        primary: text_primary,
    };

    let primary = RichColorInput {
        main: Some(or_default(brand.primary.main.as_ref(), palette::BLUE_DARK_MAIN)),
        shade: brand.primary.shade.clone(),
        text: brand.primary.text.clone(),
        contrast_text: brand.primary.text.clone(),
        ..RichColorInput::default()
    };
    let secondary = RichColorInput {
        main: Some(from_accent(
            brand.secondary.main.as_ref(),
            &base,
            steps::SECONDARY_MAIN,
        )),
        shade: Some(from_accent(
            brand.secondary.shade.as_ref(),
            &base,
            steps::SECONDARY_SHADE,
        )),
        text: Some(from_accent(
            brand.secondary.text.as_ref(),
            &base,
            steps::SECONDARY_TEXT,
        )),
        contrast_text: Some(from_accent(
            brand.secondary.text.as_ref(),
            &base,
            steps::SECONDARY_TEXT,
        )),
        ..RichColorInput::default()
    };

    ColorModeSet {
        mode: ThemeMode::Custom,
        info: intent_from(&brand.info, palette::BLUE_DARK_MAIN),
        error: intent_from(&brand.error, palette::RED_DARK_MAIN),
        success: intent_from(&brand.success, palette::GREEN_DARK_MAIN),
        warning: intent_from(&brand.warning, palette::ORANGE_DARK_MAIN),
        background: BackgroundColors {
            canvas: or_default(brand.background_canvas.as_ref(), palette::BLUE_NIGHT),
            primary: or_default(brand.background_primary.as_ref(), palette::BLUE_DARK_MAIN),
            secondary: or_default(brand.background_secondary.as_ref(), palette::BLUE_DARK_TEXT),
        },
        border: BorderColors {
            weak: from_accent(brand.border_weak.as_ref(), &border_accent, steps::BORDER_WEAK),
            medium: from_accent(
                brand.border_medium.as_ref(),
                &border_accent,
                steps::BORDER_MEDIUM,
            ),
            strong: from_accent(
                brand.border_strong.as_ref(),
                &border_accent,
                steps::BORDER_STRONG,
            ),
        },
        action: ActionColors {
            hover: from_accent(brand.action_hover.as_ref(), &base, steps::ACTION_HOVER),
            selected: from_accent(
                brand.action_selected.as_ref(),
                &base,
                steps::ACTION_SELECTED,
            ),
            selected_border: palette::ORANGE_DARK_MAIN.to_string(),
            focus: from_accent(brand.action_focus.as_ref(), &base, steps::ACTION_FOCUS),
            hover_opacity: 0.08,
            disabled_background: from_accent(
                brand.action_disabled_background.as_ref(),
                &base,
                steps::ACTION_DISABLED_BACKGROUND,
            ),
            disabled_text: from_accent(brand.text_disabled.as_ref(), &base, steps::TEXT_DISABLED),
            disabled_opacity: 0.38,
        },
        horizontal: Gradient {
            color_a: or_default(brand.horizontal.color_a.as_ref(), palette::SILVER_LIGHT),
            color_b: or_default(brand.horizontal.color_b.as_ref(), palette::SILVER_DARK),
            all: brand.horizontal.all.clone(),
        },
        vertical: Gradient {
            color_a: or_default(brand.vertical.color_a.as_ref(), palette::SILVER_LIGHT),
            color_b: or_default(brand.vertical.color_b.as_ref(), palette::SILVER_DARK),
            all: brand.vertical.all.clone(),
        },
        primary,
        secondary,
        text,
        contrast_threshold: 3.0,
        hover_factor: 0.03,
        tonal_offset: 0.15,
    }
}
