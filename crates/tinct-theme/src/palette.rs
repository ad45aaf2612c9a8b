//! Brand reference colors seeding the mode color sets.
//!
//! Process-wide constants; nothing here is derived at runtime.

/// Pure white; also the maximum-contrast reference on dark surfaces.
pub const WHITE: &str = "#ffffff";
/// Pure black; also the maximum-contrast reference on light surfaces.
pub const BLACK: &str = "#000000";

/// Darkest dark-mode surface (body canvas).
pub const GRAY_05: &str = "#111217";
/// Primary dark-mode content surface.
pub const GRAY_10: &str = "#181b1f";
/// Raised dark-mode surface (cards, menus).
pub const GRAY_15: &str = "#22252b";
/// Light-mode canvas and raised-surface gray.
pub const GRAY_90: &str = "#f4f5f5";

/// Brand blue, main shade for dark mode.
pub const BLUE_DARK_MAIN: &str = "#0073bc";
/// Brand blue, text/link shade for dark mode.
pub const BLUE_DARK_TEXT: &str = "#4e9ed7";
/// Brand blue, main shade for light mode.
pub const BLUE_LIGHT_MAIN: &str = "#0073bc";
/// Brand blue, text/link shade for light mode.
pub const BLUE_LIGHT_TEXT: &str = "#005a94";

/// Error red, main shade for dark mode.
pub const RED_DARK_MAIN: &str = "#d10e5c";
/// Error red, text shade for dark mode.
pub const RED_DARK_TEXT: &str = "#ff5286";
/// Error red, main shade for light mode.
pub const RED_LIGHT_MAIN: &str = "#e0226e";
/// Error red, text shade for light mode.
pub const RED_LIGHT_TEXT: &str = "#cf0e5b";

/// Success green, main shade for dark mode.
pub const GREEN_DARK_MAIN: &str = "#1a7f4b";
/// Success green, text shade for dark mode.
pub const GREEN_DARK_TEXT: &str = "#6ccf8e";
/// Success green, main shade for light mode.
pub const GREEN_LIGHT_MAIN: &str = "#1b855e";
/// Success green, text shade for light mode.
pub const GREEN_LIGHT_TEXT: &str = "#0a764e";

/// Warning orange, main shade for dark mode.
pub const ORANGE_DARK_MAIN: &str = "#f5b73d";
/// Warning orange, text shade for dark mode.
pub const ORANGE_DARK_TEXT: &str = "#f8d06b";
/// Warning orange, main shade for light mode.
pub const ORANGE_LIGHT_MAIN: &str = "#ff9900";
/// Warning orange, text shade for light mode.
pub const ORANGE_LIGHT_TEXT: &str = "#b5510d";

/// Deep navy backdrop used when a custom brand omits its canvas.
pub const BLUE_NIGHT: &str = "#0d294b";
/// Default first stop for unconfigured custom gradients.
pub const SILVER_LIGHT: &str = "#d1d3d4";
/// Default second stop for unconfigured custom gradients.
pub const SILVER_DARK: &str = "#a7a9ac";

/// Reference color guaranteeing maximum contrast on dark backgrounds.
pub const MAX_CONTRAST_ON_DARK: &str = WHITE;
/// Reference color guaranteeing maximum contrast on light backgrounds.
pub const MAX_CONTRAST_ON_LIGHT: &str = BLACK;
