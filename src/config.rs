//! Engine configuration.
//!
//! The original implementation existed as two near-identical variants: a
//! richer one with external-file loading and an accumulating custom-style
//! registry, and a reduced subset without them. [`EngineConfig`] unifies
//! both behind configuration flags instead of duplicated code: the default
//! reproduces the richer variant, [`EngineConfig::minimal`] the reduced one.

use serde::{Deserialize, Serialize};

/// How the engine picks its theme at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialTheme {
    /// Always start with the named theme.
    Fixed(String),
    /// Detect the OS color mode and start with `light` or `dark` accordingly.
    Detect,
}

impl Default for InitialTheme {
    fn default() -> Self {
        InitialTheme::Fixed(crate::theme::LIGHT_THEME.to_string())
    }
}

/// Configuration for a [`StyleEngine`](crate::StyleEngine).
///
/// # Example
///
/// ```rust
/// use stenocss::{EngineConfig, InitialTheme};
///
/// let config = EngineConfig {
///     initial_theme: InitialTheme::Fixed("dark".to_string()),
///     ..EngineConfig::default()
/// };
/// assert!(config.external_sources);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tag name of the inline elements the engine consumes.
    pub element_tag: String,
    /// Extension selecting which linked resources the engine fetches.
    pub file_extension: String,
    /// Whether linked external resources are fetched and expanded.
    pub external_sources: bool,
    /// Whether the accumulating custom-style registry is active.
    pub custom_styles: bool,
    /// Theme selected at construction time.
    pub initial_theme: InitialTheme,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            element_tag: "stenocss".to_string(),
            file_extension: ".sncss".to_string(),
            external_sources: true,
            custom_styles: true,
            initial_theme: InitialTheme::default(),
        }
    }
}

impl EngineConfig {
    /// The reduced profile: inline elements only, no external resources, no
    /// custom-style registry.
    pub fn minimal() -> Self {
        Self {
            external_sources: false,
            custom_styles: false,
            ..Self::default()
        }
    }

    /// Loads a configuration from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
