//! Two-stop accent gradient resolution.

use serde::{Deserialize, Serialize};

/// Template for the horizontal brand gradient of a custom theme.
pub const HORIZONTAL_TEMPLATE: &str = "linear-gradient(90deg, $0 0%, $1 100%)";
/// Template for the vertical brand gradient of a custom theme.
pub const VERTICAL_TEMPLATE: &str = "linear-gradient(0.01deg, $0 -31.2%, $1 113.07%)";

/// A two-stop gradient descriptor.
///
/// When `all` is present it is a complete gradient expression that wins over
/// template substitution; the stops are then ignored entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    /// First stop, substituted for `$0` in the template.
    pub color_a: String,
    /// Second stop, substituted for `$1` in the template.
    pub color_b: String,
    /// Complete gradient expression overriding the template.
    pub all: Option<String>,
}

/// Resolve a gradient against a template with `$0`/`$1` placeholders.
#[must_use]
pub fn resolve(template: &str, gradient: &Gradient) -> String {
    gradient.all.as_ref().map_or_else(
        || {
            template
                .replacen("$0", &gradient.color_a, 1)
                .replacen("$1", &gradient.color_b, 1)
        },
        Clone::clone,
    )
}
