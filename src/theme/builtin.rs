//! Built-in light and dark themes.

use std::collections::BTreeMap;

use super::theme::Theme;

/// Name of the built-in light theme.
pub const LIGHT_THEME: &str = "light";

/// Name of the built-in dark theme.
pub const DARK_THEME: &str = "dark";

/// The two predefined themes.
///
/// Nothing prevents switching the engine to a name outside this table; the
/// absent-key case degrades to no substitutions and no root properties.
pub fn builtin_themes() -> BTreeMap<String, Theme> {
    let light = Theme::new()
        .set("--primary-color", "#3498db")
        .set("--secondary-color", "#2ecc71")
        .set("--text-color", "#333")
        .set("--background-color", "#fff");

    let dark = Theme::new()
        .set("--primary-color", "#2c3e50")
        .set("--secondary-color", "#27ae60")
        .set("--text-color", "#ddd")
        .set("--background-color", "#181818");

    let mut themes = BTreeMap::new();
    themes.insert(LIGHT_THEME.to_string(), light);
    themes.insert(DARK_THEME.to_string(), dark);
    themes
}
