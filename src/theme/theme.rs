//! Theme struct for building custom-property sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named set of CSS custom-property values used when expanding rules.
///
/// Property names carry their `--` prefix, exactly as they appear on the
/// document root and inside `var(--…)` references.
///
/// # Example
///
/// ```rust
/// use stenocss::Theme;
///
/// let theme = Theme::new()
///     .set("--primary-color", "#3498db")
///     .set("--text-color", "#333");
///
/// assert_eq!(theme.get("--primary-color"), Some("#3498db"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    variables: BTreeMap<String, String>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a custom-property value, returning an updated theme for chaining.
    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.variables.insert(name.to_string(), value.to_string());
        self
    }

    /// Looks up a custom-property value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Returns whether the theme defines `name`.
    pub fn has(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates over the custom-property entries.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of custom properties in the theme.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if the theme defines no custom properties.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
