//! Canonical settings and brand-override documents for tests.

use serde_json::{Value, json};

/// A fully populated brand-override document.
#[must_use]
pub fn brand_document() -> Value {
    json!({
        "name": "Acme Observability",
        "baseColor": "210, 220, 230",
        "borderColor": "120, 140, 160",
        "fontHeader": "Inter",
        "fontBody": "Inter",
        "horizontal": {
            "colorA": "#4e9ed7",
            "colorB": "#0073bc",
            "all": "NOT_SET"
        },
        "vertical": {
            "colorA": "#4e9ed7",
            "colorB": "#0073bc",
            "all": "linear-gradient(0deg, #0073bc 0%, #4e9ed7 100%)"
        },
        "primary": { "main": "#0073bc", "shade": "rgb(38, 136, 198)", "text": "#ffffff" },
        "secondary": { "main": "rgba(210, 220, 230, 0.16)", "shade": "NOT_SET", "text": "NOT_SET" },
        "info": { "main": "#0073bc", "text": "#ffffff" },
        "success": { "main": "#1a7f4b", "text": "#ffffff" },
        "warning": { "main": "#f5b73d", "text": "#000000" },
        "error": { "main": "#d10e5c", "text": "#ffffff" },
        "textPrimary": "rgb(210, 220, 230)",
        "textSecondary": "NOT_SET",
        "textDisabled": "NOT_SET",
        "textLink": "NOT_SET",
        "backgroundCanvas": "#0d294b",
        "backgroundPrimary": "#0073bc",
        "backgroundSecondary": "#4e9ed7",
        "backgroundNavBar": "NOT_SET",
        "borderWeak": "NOT_SET",
        "borderMedium": "NOT_SET",
        "borderStrong": "rgba(120, 140, 160, 0.5)",
        "actionHover": "NOT_SET",
        "actionFocus": "NOT_SET",
        "actionSelected": "NOT_SET",
        "actionDisabledBackground": "NOT_SET"
    })
}

/// A sparse override: accents registered, everything else left to defaults.
#[must_use]
pub fn sparse_brand_document() -> Value {
    json!({
        "name": "Acme Minimal",
        "baseColor": "210, 220, 230",
        "primary": { "main": "#0073bc" },
        "info": { "main": "#0073bc" },
        "success": { "main": "#1a7f4b" },
        "warning": { "main": "#f5b73d" },
        "error": { "main": "#d10e5c" }
    })
}

/// Settings response body carrying the full brand override.
#[must_use]
pub fn settings_with_brand() -> String {
    json!({
        "appName": "Acme",
        "brandTheme": brand_document()
    })
    .to_string()
}

/// Settings response body without the branding field.
#[must_use]
pub fn settings_without_brand() -> String {
    json!({ "appName": "Acme" }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_bodies_are_valid_json() {
        let with_brand: Value =
            serde_json::from_str(&settings_with_brand()).expect("fixture must parse");
        assert!(with_brand.get("brandTheme").is_some());

        let without: Value =
            serde_json::from_str(&settings_without_brand()).expect("fixture must parse");
        assert!(without.get("brandTheme").is_none());
    }
}
