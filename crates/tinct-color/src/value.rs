//! Decomposition and recomposition of CSS color strings.

use crate::error::{ColorParseError, ColorResult};

/// Output notation for a decomposed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    /// `rgb(r, g, b)` notation.
    Rgb,
    /// `rgba(r, g, b, a)` notation.
    Rgba,
}

/// A color string broken into numeric channels.
///
/// Channels are kept as `f64` in 0–255 so repeated tonal shifts do not
/// accumulate rounding error; recomposition trims to three decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecomposedColor {
    /// Notation the color recomposes to.
    pub format: ColorFormat,
    /// Red channel in 0–255.
    pub red: f64,
    /// Green channel in 0–255.
    pub green: f64,
    /// Blue channel in 0–255.
    pub blue: f64,
    /// Opacity in 0–1 when the notation carries one.
    pub alpha: Option<f64>,
}

impl DecomposedColor {
    /// Parse a supported color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` hex forms (case-insensitive)
    /// and `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer or fractional
    /// channels.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] when the input matches no supported
    /// notation or a component is out of range.
    pub fn parse(value: &str) -> ColorResult<Self> {
        let trimmed = value.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            return Self::parse_hex(trimmed, digits);
        }
        if let Some(body) = functional_body(trimmed, "rgba") {
            return Self::parse_functional(trimmed, body, true);
        }
        if let Some(body) = functional_body(trimmed, "rgb") {
            return Self::parse_functional(trimmed, body, false);
        }
        Err(ColorParseError::UnsupportedNotation {
            value: trimmed.to_string(),
        })
    }

    /// Replace the opacity, switching the notation to `rgba`.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.format = ColorFormat::Rgba;
        self.alpha = Some(alpha);
        self
    }

    /// Recompose into a CSS color string.
    #[must_use]
    pub fn css(&self) -> String {
        let red = format_component(self.red);
        let green = format_component(self.green);
        let blue = format_component(self.blue);
        match self.format {
            ColorFormat::Rgb => format!("rgb({red}, {green}, {blue})"),
            ColorFormat::Rgba => {
                let alpha = format_component(self.alpha.unwrap_or(1.0));
                format!("rgba({red}, {green}, {blue}, {alpha})")
            }
        }
    }

    fn parse_hex(value: &str, digits: &str) -> ColorResult<Self> {
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex {
                value: value.to_string(),
            });
        }
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
            6 | 8 => digits.to_string(),
            _ => {
                return Err(ColorParseError::InvalidHex {
                    value: value.to_string(),
                });
            }
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_or(0.0, f64::from)
        };
        let alpha = if expanded.len() == 8 {
            Some(channel(6..8) / 255.0)
        } else {
            None
        };
        Ok(Self {
            format: if alpha.is_some() {
                ColorFormat::Rgba
            } else {
                ColorFormat::Rgb
            },
            red: channel(0..2),
            green: channel(2..4),
            blue: channel(4..6),
            alpha,
        })
    }

    fn parse_functional(value: &str, body: &str, has_alpha: bool) -> ColorResult<Self> {
        let components: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if components.len() != expected {
            return Err(ColorParseError::UnsupportedNotation {
                value: value.to_string(),
            });
        }
        let channel = |component: &str| -> ColorResult<f64> {
            component
                .parse::<f64>()
                .ok()
                .filter(|parsed| (0.0..=255.0).contains(parsed))
                .ok_or_else(|| ColorParseError::InvalidChannel {
                    value: value.to_string(),
                    channel: component.to_string(),
                })
        };
        let alpha = if has_alpha {
            let component = components[3];
            let parsed = component
                .parse::<f64>()
                .ok()
                .filter(|parsed| (0.0..=1.0).contains(parsed))
                .ok_or_else(|| ColorParseError::InvalidAlpha {
                    value: value.to_string(),
                    alpha: component.to_string(),
                })?;
            Some(parsed)
        } else {
            None
        };
        Ok(Self {
            format: if has_alpha {
                ColorFormat::Rgba
            } else {
                ColorFormat::Rgb
            },
            red: channel(components[0])?,
            green: channel(components[1])?,
            blue: channel(components[2])?,
            alpha,
        })
    }
}

/// Extract the argument body of `name(…)` notation, if present.
fn functional_body<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
}

/// Format a numeric component, trimming to three decimal places.
fn format_component(component: f64) -> String {
    let rounded = (component * 1000.0).round() / 1000.0;
    format!("{rounded}")
}
