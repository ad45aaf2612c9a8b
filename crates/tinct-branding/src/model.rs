//! Wire model for the remotely supplied brand override.
//!
//! The settings endpoint marks "no override supplied" with the literal
//! `"NOT_SET"`. That sentinel exists only on the wire: decoding maps it (and
//! absent fields) to `None`, so the rest of the engine never compares magic
//! strings.

use serde::{Deserialize, Deserializer, Serialize};

/// Wire sentinel meaning "no override supplied; use the computed default".
pub const NOT_SET: &str = "NOT_SET";

/// Decode an optional scalar, folding the wire sentinel into `None`.
fn maybe_not_set<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| value != NOT_SET))
}

/// A two-stop accent gradient override.
///
/// When `all` is present it is a complete gradient expression that replaces
/// template substitution entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientOverride {
    /// First gradient stop.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub color_a: Option<String>,
    /// Second gradient stop.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub color_b: Option<String>,
    /// Complete gradient expression overriding both stops.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub all: Option<String>,
}

/// Partial rich-color intent for one semantic category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorGroup {
    /// Main color for the category.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// Hover shade for the category.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    /// Text color for the category.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Remotely supplied brand customization document.
///
/// Field names mirror the settings endpoint's `camelCase` JSON. Every scalar
/// leaf is optional; `None` means the engine computes a default from the
/// registered accents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandOverride {
    /// Display name of the brand.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base accent channels (`r, g, b`) composed into alpha-step defaults.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    /// Border accent channels; defaults to the base accent when absent.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    /// Header typeface hint for downstream consumers.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub font_header: Option<String>,
    /// Body typeface hint for downstream consumers.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub font_body: Option<String>,

    /// Horizontal accent gradient.
    pub horizontal: GradientOverride,
    /// Vertical accent gradient.
    pub vertical: GradientOverride,

    /// Primary intent block.
    pub primary: ColorGroup,
    /// Secondary intent block.
    pub secondary: ColorGroup,
    /// Info intent block.
    pub info: ColorGroup,
    /// Success intent block.
    pub success: ColorGroup,
    /// Warning intent block.
    pub warning: ColorGroup,
    /// Error intent block.
    pub error: ColorGroup,

    /// Primary text color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<String>,
    /// Secondary text color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    /// Disabled text color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub text_disabled: Option<String>,
    /// Link text color; falls back to the resolved primary text color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub text_link: Option<String>,

    /// Body/canvas background.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub background_canvas: Option<String>,
    /// Primary content-pane background.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub background_primary: Option<String>,
    /// Background for elements raised above the primary pane.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub background_secondary: Option<String>,
    /// Navigation-bar background hint for downstream consumers.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub background_nav_bar: Option<String>,

    /// Weak border color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub border_weak: Option<String>,
    /// Medium border color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub border_medium: Option<String>,
    /// Strong border color.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub border_strong: Option<String>,

    /// Hovered menu item / option background.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub action_hover: Option<String>,
    /// Focused menu item / option background.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub action_focus: Option<String>,
    /// Selected menu item / option background.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub action_selected: Option<String>,
    /// Disabled control background.
    #[serde(deserialize_with = "maybe_not_set", skip_serializing_if = "Option::is_none")]
    pub action_disabled_background: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentinel_decodes_to_none() -> anyhow::Result<()> {
        let document = json!({
            "baseColor": "0, 115, 188",
            "textLink": "NOT_SET",
            "horizontal": { "colorA": "#D1D3D4", "colorB": "#A7A9AC", "all": "NOT_SET" },
            "primary": { "main": "#0073BC", "shade": "NOT_SET" },
        });
        let brand: BrandOverride = serde_json::from_value(document)?;
        assert_eq!(brand.base_color.as_deref(), Some("0, 115, 188"));
        assert_eq!(brand.text_link, None);
        assert_eq!(brand.horizontal.all, None);
        assert_eq!(brand.horizontal.color_a.as_deref(), Some("#D1D3D4"));
        assert_eq!(brand.primary.main.as_deref(), Some("#0073BC"));
        assert_eq!(brand.primary.shade, None);
        Ok(())
    }

    #[test]
    fn absent_fields_decode_to_none() -> anyhow::Result<()> {
        let brand: BrandOverride = serde_json::from_str("{}")?;
        assert_eq!(brand, BrandOverride::default());
        Ok(())
    }

    #[test]
    fn null_scalars_decode_to_none() -> anyhow::Result<()> {
        let brand: BrandOverride = serde_json::from_value(json!({ "borderColor": null }))?;
        assert_eq!(brand.border_color, None);
        Ok(())
    }
}
