//! Hand-authored dark and light seed sets.
//!
//! Each set declares only what distinguishes it: intents carry `main` (and
//! sometimes `text`/`border`) and rely on derivation for the rest, while the
//! raw sections are alpha steps over a fixed base — a white base for dark
//! mode, a black base for light mode — tuned for the mode's luminance.

use crate::gradient::Gradient;
use crate::input::RichColorInput;
use crate::model::{
    ActionColors, BackgroundColors, BorderColors, ColorModeSet, TextColors, ThemeMode,
};
use crate::palette;

/// Channels behind dark mode's white-opacity steps.
const WHITE_BASE: &str = "204, 204, 220";
/// Channels behind light mode's black-opacity steps.
const BLACK_BASE: &str = "36, 41, 46";

/// Compose an `rgba(…)` step over base channels.
fn base_alpha(base: &str, opacity: f64) -> String {
    format!("rgba({base}, {opacity})")
}

/// The dark seed set.
#[must_use]
pub fn dark() -> ColorModeSet {
    let text = TextColors {
        primary: format!("rgb({WHITE_BASE})"),
        secondary: base_alpha(WHITE_BASE, 0.65),
        disabled: base_alpha(WHITE_BASE, 0.6),
        link: palette::BLUE_DARK_TEXT.to_string(),
        max_contrast: palette::WHITE.to_string(),
    };

    let primary = RichColorInput {
        main: Some(palette::BLUE_DARK_MAIN.to_string()),
        text: Some(palette::BLUE_DARK_TEXT.to_string()),
        border: Some(palette::BLUE_DARK_TEXT.to_string()),
        ..RichColorInput::default()
    };
    // Info intentionally aliases primary in dark mode.
    let info = primary.clone();
    let secondary = RichColorInput {
        main: Some(base_alpha(WHITE_BASE, 0.1)),
        shade: Some(base_alpha(WHITE_BASE, 0.14)),
        transparent: Some(base_alpha(WHITE_BASE, 0.08)),
        text: Some(text.primary.clone()),
        contrast_text: Some(format!("rgb({WHITE_BASE})")),
        border: Some(base_alpha(WHITE_BASE, 0.08)),
        ..RichColorInput::default()
    };

    ColorModeSet {
        mode: ThemeMode::Dark,
        error: RichColorInput {
            main: Some(palette::RED_DARK_MAIN.to_string()),
            text: Some(palette::RED_DARK_TEXT.to_string()),
            ..RichColorInput::default()
        },
        success: RichColorInput {
            main: Some(palette::GREEN_DARK_MAIN.to_string()),
            text: Some(palette::GREEN_DARK_TEXT.to_string()),
            ..RichColorInput::default()
        },
        warning: RichColorInput {
            main: Some(palette::ORANGE_DARK_MAIN.to_string()),
            text: Some(palette::ORANGE_DARK_TEXT.to_string()),
            ..RichColorInput::default()
        },
        background: BackgroundColors {
            canvas: palette::GRAY_05.to_string(),
            primary: palette::GRAY_10.to_string(),
            secondary: palette::GRAY_15.to_string(),
        },
        border: BorderColors {
            weak: base_alpha(WHITE_BASE, 0.12),
            medium: base_alpha(WHITE_BASE, 0.2),
            strong: base_alpha(WHITE_BASE, 0.3),
        },
        action: ActionColors {
            hover: base_alpha(WHITE_BASE, 0.16),
            selected: base_alpha(WHITE_BASE, 0.12),
            selected_border: palette::ORANGE_DARK_MAIN.to_string(),
            focus: base_alpha(WHITE_BASE, 0.16),
            hover_opacity: 0.08,
            disabled_background: base_alpha(WHITE_BASE, 0.04),
            disabled_text: text.disabled.clone(),
            disabled_opacity: 0.38,
        },
        horizontal: Gradient {
            color_a: palette::BLUE_DARK_TEXT.to_string(),
            color_b: palette::BLUE_DARK_MAIN.to_string(),
            all: Some("linear-gradient(270deg, #4e9ed7 0%, #0073bc 100%)".to_string()),
        },
        vertical: Gradient {
            color_a: palette::BLUE_DARK_TEXT.to_string(),
            color_b: palette::BLUE_DARK_MAIN.to_string(),
            all: Some("linear-gradient(0.01deg, #4e9ed7 0.01%, #0073bc 99.99%)".to_string()),
        },
        primary,
        secondary,
        info,
        text,
        contrast_threshold: 3.0,
        hover_factor: 0.03,
        tonal_offset: 0.15,
    }
}

/// The light seed set.
///
/// The tonal offset is larger than dark mode's: shades are derived toward
/// black here and need a bigger step to stay visible on light surfaces.
#[must_use]
pub fn light() -> ColorModeSet {
    let primary = RichColorInput {
        main: Some(palette::BLUE_LIGHT_MAIN.to_string()),
        text: Some(palette::BLUE_LIGHT_TEXT.to_string()),
        border: Some(palette::BLUE_LIGHT_TEXT.to_string()),
        ..RichColorInput::default()
    };
    let text = TextColors {
        primary: base_alpha(BLACK_BASE, 1.0),
        secondary: base_alpha(BLACK_BASE, 0.75),
        disabled: base_alpha(BLACK_BASE, 0.5),
        link: palette::BLUE_LIGHT_TEXT.to_string(),
        max_contrast: palette::BLACK.to_string(),
    };
    let border = BorderColors {
        weak: base_alpha(BLACK_BASE, 0.12),
        medium: base_alpha(BLACK_BASE, 0.3),
        strong: base_alpha(BLACK_BASE, 0.4),
    };
    let secondary = RichColorInput {
        main: Some(base_alpha(BLACK_BASE, 0.08)),
        shade: Some(base_alpha(BLACK_BASE, 0.15)),
        transparent: Some(base_alpha(BLACK_BASE, 0.08)),
        text: Some(text.primary.clone()),
        contrast_text: Some(base_alpha(BLACK_BASE, 1.0)),
        border: Some(border.weak.clone()),
        ..RichColorInput::default()
    };

    ColorModeSet {
        mode: ThemeMode::Light,
        info: RichColorInput {
            main: Some(palette::BLUE_LIGHT_MAIN.to_string()),
            text: Some(palette::BLUE_LIGHT_TEXT.to_string()),
            ..RichColorInput::default()
        },
        error: RichColorInput {
            main: Some(palette::RED_LIGHT_MAIN.to_string()),
            text: Some(palette::RED_LIGHT_TEXT.to_string()),
            border: Some(palette::RED_LIGHT_TEXT.to_string()),
            ..RichColorInput::default()
        },
        success: RichColorInput {
            main: Some(palette::GREEN_LIGHT_MAIN.to_string()),
            text: Some(palette::GREEN_LIGHT_TEXT.to_string()),
            ..RichColorInput::default()
        },
        warning: RichColorInput {
            main: Some(palette::ORANGE_LIGHT_MAIN.to_string()),
            text: Some(palette::ORANGE_LIGHT_TEXT.to_string()),
            ..RichColorInput::default()
        },
        background: BackgroundColors {
            canvas: palette::GRAY_90.to_string(),
            primary: palette::WHITE.to_string(),
            secondary: palette::GRAY_90.to_string(),
        },
        action: ActionColors {
            hover: base_alpha(BLACK_BASE, 0.12),
            selected: base_alpha(BLACK_BASE, 0.08),
            selected_border: palette::ORANGE_LIGHT_MAIN.to_string(),
            focus: base_alpha(BLACK_BASE, 0.12),
            hover_opacity: 0.08,
            disabled_background: base_alpha(BLACK_BASE, 0.04),
            disabled_text: text.disabled.clone(),
            disabled_opacity: 0.38,
        },
        horizontal: Gradient {
            color_a: palette::BLUE_LIGHT_MAIN.to_string(),
            color_b: palette::BLUE_DARK_TEXT.to_string(),
            all: Some("linear-gradient(90deg, #0073bc 0%, #4e9ed7 100%)".to_string()),
        },
        vertical: Gradient {
            color_a: palette::BLUE_DARK_TEXT.to_string(),
            color_b: palette::BLUE_LIGHT_MAIN.to_string(),
            all: Some("linear-gradient(0.01deg, #4e9ed7 -31.2%, #0073bc 113.07%)".to_string()),
        },
        primary,
        secondary,
        text,
        border,
        contrast_threshold: 3.0,
        hover_factor: 0.03,
        tonal_offset: 0.2,
    }
}
