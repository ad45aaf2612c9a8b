//! Deep-partial overrides and their merges onto a seed set.
//!
//! Merging is hand-written per record over the statically known schema:
//! `Some` leaves replace the base value, `None` leaves keep it. There is no
//! reflection and no generic recursion, so an override can never introduce a
//! field the model does not have.

use serde::{Deserialize, Serialize};

use crate::model::{
    ActionColors, BackgroundColors, BorderColors, Gradients, TextColors, ThemeMode,
};

/// Partial rich-color intent supplied by a caller or a seed set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichColorInput {
    /// Main color; the one field every derivation requires.
    pub main: Option<String>,
    /// Hover shade.
    pub shade: Option<String>,
    /// Text color.
    pub text: Option<String>,
    /// Border color.
    pub border: Option<String>,
    /// Subtly colored background.
    pub transparent: Option<String>,
    /// Weak colored border.
    pub border_transparent: Option<String>,
    /// Text color for text on top of `main`.
    pub contrast_text: Option<String>,
}

impl RichColorInput {
    /// Overlay `self` on a base intent, field by field.
    #[must_use]
    pub fn merge_over(self, base: &Self) -> Self {
        Self {
            main: self.main.or_else(|| base.main.clone()),
            shade: self.shade.or_else(|| base.shade.clone()),
            text: self.text.or_else(|| base.text.clone()),
            border: self.border.or_else(|| base.border.clone()),
            transparent: self.transparent.or_else(|| base.transparent.clone()),
            border_transparent: self
                .border_transparent
                .or_else(|| base.border_transparent.clone()),
            contrast_text: self.contrast_text.or_else(|| base.contrast_text.clone()),
        }
    }
}

/// Partial text colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextColorsInput {
    /// Primary body text.
    pub primary: Option<String>,
    /// Secondary, de-emphasized text.
    pub secondary: Option<String>,
    /// Disabled text.
    pub disabled: Option<String>,
    /// Link text.
    pub link: Option<String>,
    /// Auto white-or-dark text on colored backgrounds.
    pub max_contrast: Option<String>,
}

impl TextColorsInput {
    /// Overlay `self` on complete base text colors.
    #[must_use]
    pub fn merge_over(self, base: &TextColors) -> TextColors {
        TextColors {
            primary: self.primary.unwrap_or_else(|| base.primary.clone()),
            secondary: self.secondary.unwrap_or_else(|| base.secondary.clone()),
            disabled: self.disabled.unwrap_or_else(|| base.disabled.clone()),
            link: self.link.unwrap_or_else(|| base.link.clone()),
            max_contrast: self.max_contrast.unwrap_or_else(|| base.max_contrast.clone()),
        }
    }
}

/// Partial background colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundColorsInput {
    /// Body and dashboard background.
    pub canvas: Option<String>,
    /// Primary content-pane background.
    pub primary: Option<String>,
    /// Raised-surface background.
    pub secondary: Option<String>,
}

impl BackgroundColorsInput {
    /// Overlay `self` on complete base background colors.
    #[must_use]
    pub fn merge_over(self, base: &BackgroundColors) -> BackgroundColors {
        BackgroundColors {
            canvas: self.canvas.unwrap_or_else(|| base.canvas.clone()),
            primary: self.primary.unwrap_or_else(|| base.primary.clone()),
            secondary: self.secondary.unwrap_or_else(|| base.secondary.clone()),
        }
    }
}

/// Partial border colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderColorsInput {
    /// Weak border.
    pub weak: Option<String>,
    /// Medium border.
    pub medium: Option<String>,
    /// Strong border.
    pub strong: Option<String>,
}

impl BorderColorsInput {
    /// Overlay `self` on complete base border colors.
    #[must_use]
    pub fn merge_over(self, base: &BorderColors) -> BorderColors {
        BorderColors {
            weak: self.weak.unwrap_or_else(|| base.weak.clone()),
            medium: self.medium.unwrap_or_else(|| base.medium.clone()),
            strong: self.strong.unwrap_or_else(|| base.strong.clone()),
        }
    }
}

/// Partial interaction-state colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionColorsInput {
    /// Hovered menu item / option background.
    pub hover: Option<String>,
    /// Selected menu item / option background.
    pub selected: Option<String>,
    /// Border for selected items.
    pub selected_border: Option<String>,
    /// Focused menu item / option background.
    pub focus: Option<String>,
    /// Opacity applied to colored-background hovers.
    pub hover_opacity: Option<f64>,
    /// Disabled control background.
    pub disabled_background: Option<String>,
    /// Disabled text.
    pub disabled_text: Option<String>,
    /// Opacity applied to disabled controls.
    pub disabled_opacity: Option<f64>,
}

impl ActionColorsInput {
    /// Overlay `self` on complete base action colors.
    #[must_use]
    pub fn merge_over(self, base: &ActionColors) -> ActionColors {
        ActionColors {
            hover: self.hover.unwrap_or_else(|| base.hover.clone()),
            selected: self.selected.unwrap_or_else(|| base.selected.clone()),
            selected_border: self
                .selected_border
                .unwrap_or_else(|| base.selected_border.clone()),
            focus: self.focus.unwrap_or_else(|| base.focus.clone()),
            hover_opacity: self.hover_opacity.unwrap_or(base.hover_opacity),
            disabled_background: self
                .disabled_background
                .unwrap_or_else(|| base.disabled_background.clone()),
            disabled_text: self.disabled_text.unwrap_or_else(|| base.disabled_text.clone()),
            disabled_opacity: self.disabled_opacity.unwrap_or(base.disabled_opacity),
        }
    }
}

/// Partial resolved-gradient overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientsInput {
    /// Horizontal brand gradient expression.
    pub brand_horizontal: Option<String>,
    /// Vertical brand gradient expression.
    pub brand_vertical: Option<String>,
}

impl GradientsInput {
    /// Overlay `self` on resolved base gradients.
    #[must_use]
    pub fn merge_over(self, base: &Gradients) -> Gradients {
        Gradients {
            brand_horizontal: self
                .brand_horizontal
                .unwrap_or_else(|| base.brand_horizontal.clone()),
            brand_vertical: self
                .brand_vertical
                .unwrap_or_else(|| base.brand_vertical.clone()),
        }
    }
}

/// Caller-supplied partial overrides for one token build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColorsInput {
    /// Mode to build for; defaults to dark.
    pub mode: Option<ThemeMode>,
    /// Primary intent overrides.
    pub primary: RichColorInput,
    /// Secondary intent overrides.
    pub secondary: RichColorInput,
    /// Info intent overrides.
    pub info: RichColorInput,
    /// Error intent overrides.
    pub error: RichColorInput,
    /// Success intent overrides.
    pub success: RichColorInput,
    /// Warning intent overrides.
    pub warning: RichColorInput,
    /// Text color overrides.
    pub text: TextColorsInput,
    /// Background color overrides.
    pub background: BackgroundColorsInput,
    /// Border color overrides.
    pub border: BorderColorsInput,
    /// Interaction-state overrides.
    pub action: ActionColorsInput,
    /// Gradient expression overrides.
    pub gradients: GradientsInput,
    /// Minimum contrast ratio override.
    pub contrast_threshold: Option<f64>,
    /// Emphasize factor override.
    pub hover_factor: Option<f64>,
    /// Tonal offset override.
    pub tonal_offset: Option<f64>,
}
