//! Color manipulation primitives used by the token derivation engine.
//!
//! Blend directions follow WCAG 2.1: luminance is computed on
//! gamma-linearized channels, and `emphasize` picks its direction from the
//! perceptual midpoint rather than raw channel averages.

use crate::error::ColorResult;
use crate::value::DecomposedColor;

/// Luminance above which a color counts as perceptually light.
const LIGHT_LUMINANCE: f64 = 0.5;

/// Replace a color's opacity with `amount`, clamped to 0–1.
///
/// The result always uses `rgba(…)` notation.
///
/// # Errors
///
/// Returns a [`crate::ColorParseError`] when `color` cannot be parsed.
pub fn alpha(color: &str, amount: f64) -> ColorResult<String> {
    let decomposed = DecomposedColor::parse(color)?;
    Ok(decomposed.with_alpha(amount.clamp(0.0, 1.0)).css())
}

/// Blend a color toward white by the fractional `amount`.
///
/// # Errors
///
/// Returns a [`crate::ColorParseError`] when `color` cannot be parsed.
pub fn lighten(color: &str, amount: f64) -> ColorResult<String> {
    let mut decomposed = DecomposedColor::parse(color)?;
    let amount = amount.clamp(0.0, 1.0);
    decomposed.red = (255.0 - decomposed.red).mul_add(amount, decomposed.red);
    decomposed.green = (255.0 - decomposed.green).mul_add(amount, decomposed.green);
    decomposed.blue = (255.0 - decomposed.blue).mul_add(amount, decomposed.blue);
    Ok(decomposed.css())
}

/// Blend a color toward black by the fractional `amount`.
///
/// # Errors
///
/// Returns a [`crate::ColorParseError`] when `color` cannot be parsed.
pub fn darken(color: &str, amount: f64) -> ColorResult<String> {
    let mut decomposed = DecomposedColor::parse(color)?;
    let amount = amount.clamp(0.0, 1.0);
    decomposed.red *= 1.0 - amount;
    decomposed.green *= 1.0 - amount;
    decomposed.blue *= 1.0 - amount;
    Ok(decomposed.css())
}

/// WCAG 2.1 relative luminance of a color, in 0–1.
///
/// # Errors
///
/// Returns a [`crate::ColorParseError`] when `color` cannot be parsed.
pub fn relative_luminance(color: &str) -> ColorResult<f64> {
    let decomposed = DecomposedColor::parse(color)?;
    Ok(luminance_of(&decomposed))
}

/// WCAG contrast ratio between two colors, in 1–21.
///
/// When `background` carries an alpha below 1 and `fallback_background` is
/// supplied, the background is composited over that opaque backdrop first so
/// the luminance read reflects what actually renders.
///
/// # Errors
///
/// Returns a [`crate::ColorParseError`] when any input cannot be parsed.
pub fn contrast_ratio(
    foreground: &str,
    background: &str,
    fallback_background: Option<&str>,
) -> ColorResult<f64> {
    let foreground = DecomposedColor::parse(foreground)?;
    let mut background = DecomposedColor::parse(background)?;
    if background.alpha.is_some_and(|value| value < 1.0) {
        if let Some(backdrop) = fallback_background {
            background = composite_over(&background, &DecomposedColor::parse(backdrop)?);
        }
    }
    let first = luminance_of(&foreground);
    let second = luminance_of(&background);
    let lighter = first.max(second);
    let darker = first.min(second);
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Darken a perceptually light color, lighten a perceptually dark one.
///
/// # Errors
///
/// Returns a [`crate::ColorParseError`] when `color` cannot be parsed.
pub fn emphasize(color: &str, factor: f64) -> ColorResult<String> {
    if relative_luminance(color)? > LIGHT_LUMINANCE {
        darken(color, factor)
    } else {
        lighten(color, factor)
    }
}

/// Composite a translucent color over an opaque backdrop.
fn composite_over(color: &DecomposedColor, backdrop: &DecomposedColor) -> DecomposedColor {
    let coverage = color.alpha.unwrap_or(1.0);
    let blend = |over: f64, under: f64| over.mul_add(coverage, under * (1.0 - coverage));
    DecomposedColor {
        format: crate::value::ColorFormat::Rgb,
        red: blend(color.red, backdrop.red),
        green: blend(color.green, backdrop.green),
        blue: blend(color.blue, backdrop.blue),
        alpha: None,
    }
}

/// Linearized luminance of decomposed channels.
fn luminance_of(color: &DecomposedColor) -> f64 {
    let red = linearize(color.red);
    let green = linearize(color.green);
    let blue = linearize(color.blue);
    0.2126f64.mul_add(red, 0.7152f64.mul_add(green, 0.0722 * blue))
}

/// Gamma-linearize a single 0–255 channel.
fn linearize(channel: f64) -> f64 {
    let scaled = channel / 255.0;
    if scaled <= 0.03928 {
        scaled / 12.92
    } else {
        ((scaled + 0.055) / 1.055).powf(2.4)
    }
}
