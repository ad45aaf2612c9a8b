//! Complete token-set records produced by the builder.

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::gradient::Gradient;
use crate::input::RichColorInput;
use crate::rich::{DeriveContext, contrast_text_for};

/// Display mode selecting a seed color set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Built-in dark seed set.
    #[default]
    Dark,
    /// Built-in light seed set.
    Light,
    /// Seed set built from the cached brand override.
    Custom,
}

impl ThemeMode {
    /// Whether tonal shades move toward black rather than white.
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

/// A fully derived seven-attribute color record for one semantic intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichColor {
    /// Semantic intent (primary, secondary, info, error, etc).
    pub name: String,
    /// Main color.
    pub main: String,
    /// Hover shade.
    pub shade: String,
    /// Text color.
    pub text: String,
    /// Border color.
    pub border: String,
    /// Subtly colored background.
    pub transparent: String,
    /// Weak colored border for banners, badges and tags.
    pub border_transparent: String,
    /// Text color for text on top of `main`.
    pub contrast_text: String,
}

/// Raw text colors for the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary body text.
    pub primary: String,
    /// Secondary, de-emphasized text.
    pub secondary: String,
    /// Disabled text.
    pub disabled: String,
    /// Link text.
    pub link: String,
    /// Auto white-or-dark text on colored backgrounds.
    pub max_contrast: String,
}

/// Raw background colors for the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Body and dashboard background.
    pub canvas: String,
    /// Primary content-pane background.
    pub primary: String,
    /// Background for elements raised above the primary pane.
    pub secondary: String,
}

/// Raw border colors for the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderColors {
    /// Weak border.
    pub weak: String,
    /// Medium border.
    pub medium: String,
    /// Strong border.
    pub strong: String,
}

/// Interaction-state colors and opacities for the active mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionColors {
    /// Hovered menu item / option background.
    pub hover: String,
    /// Selected menu item / option background.
    pub selected: String,
    /// Border for selected items when a background change is not enough.
    pub selected_border: String,
    /// Focused menu item / option background.
    pub focus: String,
    /// Opacity applied to colored-background hovers.
    pub hover_opacity: f64,
    /// Disabled control background.
    pub disabled_background: String,
    /// Disabled text.
    pub disabled_text: String,
    /// Opacity applied to disabled controls.
    pub disabled_opacity: f64,
}

/// Resolved accent gradient expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradients {
    /// Horizontal brand gradient.
    pub brand_horizontal: String,
    /// Vertical brand gradient.
    pub brand_vertical: String,
}

/// Per-mode seed bundle the builder resolves against.
///
/// The six intents are deliberately partial; [`crate::rich::derive`]
/// completes them. Raw sections and scalars are complete.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModeSet {
    /// Mode this set seeds.
    pub mode: ThemeMode,
    /// Primary intent seed.
    pub primary: RichColorInput,
    /// Secondary intent seed.
    pub secondary: RichColorInput,
    /// Info intent seed.
    pub info: RichColorInput,
    /// Error intent seed.
    pub error: RichColorInput,
    /// Success intent seed.
    pub success: RichColorInput,
    /// Warning intent seed.
    pub warning: RichColorInput,
    /// Raw text colors.
    pub text: TextColors,
    /// Raw background colors.
    pub background: BackgroundColors,
    /// Raw border colors.
    pub border: BorderColors,
    /// Interaction-state colors.
    pub action: ActionColors,
    /// Horizontal gradient descriptor.
    pub horizontal: Gradient,
    /// Vertical gradient descriptor.
    pub vertical: Gradient,
    /// Minimum acceptable text/background contrast ratio.
    pub contrast_threshold: f64,
    /// Default emphasize factor for hover states.
    pub hover_factor: f64,
    /// Fractional shift used to compute intent shades.
    pub tonal_offset: f64,
}

/// The finished token set: no absent fields remain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Mode the tokens were derived for.
    pub mode: ThemeMode,
    /// Primary intent.
    pub primary: RichColor,
    /// Secondary intent.
    pub secondary: RichColor,
    /// Info intent.
    pub info: RichColor,
    /// Error intent.
    pub error: RichColor,
    /// Success intent.
    pub success: RichColor,
    /// Warning intent.
    pub warning: RichColor,
    /// Raw text colors.
    pub text: TextColors,
    /// Raw background colors.
    pub background: BackgroundColors,
    /// Raw border colors.
    pub border: BorderColors,
    /// Interaction-state colors.
    pub action: ActionColors,
    /// Resolved gradients.
    pub gradients: Gradients,
    /// Effective minimum contrast ratio.
    pub contrast_threshold: f64,
    /// Effective emphasize factor.
    pub hover_factor: f64,
    /// Effective tonal offset.
    pub tonal_offset: f64,
}

impl ThemeColors {
    /// Text color for an arbitrary background.
    ///
    /// Returns whichever maximum-contrast reference clears `threshold`
    /// (defaulting to the build's effective threshold) against `background`,
    /// preferring the on-dark reference. Translucent backgrounds are read
    /// over the primary content surface.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Color`] when `background` cannot be parsed.
    pub fn contrast_text(
        &self,
        background: &str,
        threshold: Option<f64>,
    ) -> ThemeResult<&'static str> {
        let ctx = DeriveContext {
            light_mode: self.mode.is_light(),
            tonal_offset: self.tonal_offset,
            contrast_threshold: threshold.unwrap_or(self.contrast_threshold),
            surface: &self.background.primary,
        };
        contrast_text_for(background, &ctx)
    }

    /// Brighten or darken a color by `factor`, defaulting to the build's
    /// effective hover factor.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Color`] when `color` cannot be parsed.
    pub fn emphasize(&self, color: &str, factor: Option<f64>) -> ThemeResult<String> {
        tinct_color::emphasize(color, factor.unwrap_or(self.hover_factor))
            .map_err(|source| ThemeError::color("theme.emphasize", source))
    }
}
