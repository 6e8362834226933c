//! Token-to-expansion registry.

use std::collections::HashMap;

use super::expansion::Expansion;

/// Default breakpoint names and their pixel widths.
///
/// Each default breakpoint also materializes a derived media-query entry in
/// the built-in [`ShorthandTable`].
pub const DEFAULT_BREAKPOINTS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("xxl", "1600px"),
];

/// Formats the media-query prefix derived from a breakpoint width.
pub fn media_query(size: &str) -> String {
    format!("@media (max-width: {size})")
}

/// A registry of shorthand tokens and their expansions.
///
/// Keys are unique; inserting a token again overwrites its expansion. There
/// is no ordering requirement. Lookups that miss are not an error: the
/// engine passes unknown tokens through verbatim on the assumption that they
/// are already valid CSS.
#[derive(Debug, Clone, Default)]
pub struct ShorthandTable {
    entries: HashMap<String, Expansion>,
}

impl ShorthandTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in table, deriving one media-query entry per
    /// breakpoint in `breakpoints`.
    pub fn builtin<'a, I>(breakpoints: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        use Expansion::{Compound, Property, PseudoClass, VarRef};

        let mut table = Self::new();

        let properties = [
            ("color", "color"),
            ("bg", "background-color"),
            ("size", "font-size"),
            ("radius", "border-radius"),
            ("padding", "padding"),
            ("margin", "margin"),
            ("display", "display"),
            ("align", "text-align"),
            ("shadow", "box-shadow"),
            ("transition", "transition"),
            ("zindex", "z-index"),
            ("opacity", "opacity"),
            ("gap", "gap"),
            ("direction", "flex-direction"),
            ("justify", "justify-content"),
            ("items", "align-items"),
            ("content", "align-content"),
            ("font", "font-family"),
            ("weight", "font-weight"),
            ("spacing", "letter-spacing"),
            ("transform", "text-transform"),
            ("animate", "animation"),
            ("float", "float"),
            ("width", "width"),
            ("height", "height"),
        ];
        for (token, property) in properties {
            table.insert(token, Property(property.to_string()));
        }

        table.insert("flex", Compound("display: flex".to_string()));
        table.insert("grid", Compound("display: grid".to_string()));

        table.insert("hover", PseudoClass(":hover".to_string()));
        table.insert("active", PseudoClass(":active".to_string()));
        table.insert("focus", PseudoClass(":focus".to_string()));

        table.insert("primary", VarRef("var(--primary-color)".to_string()));
        table.insert("secondary", VarRef("var(--secondary-color)".to_string()));

        for (name, size) in breakpoints {
            table.insert(name, Expansion::MediaQuery(media_query(size)));
        }

        table
    }

    /// Inserts or overwrites a token mapping.
    pub fn insert(&mut self, token: &str, expansion: Expansion) {
        self.entries.insert(token.to_string(), expansion);
    }

    /// Looks up a token.
    pub fn get(&self, token: &str) -> Option<&Expansion> {
        self.entries.get(token)
    }

    /// Returns whether the table maps `token`.
    pub fn has(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// The variable reference a value-position token resolves to, if any.
    ///
    /// Only [`Expansion::VarRef`] entries participate; a value that happens
    /// to collide with a property alias or breakpoint name is left alone.
    pub fn var_ref(&self, value: &str) -> Option<&str> {
        match self.entries.get(value) {
            Some(Expansion::VarRef(reference)) => Some(reference),
            _ => None,
        }
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ShorthandTable {
        ShorthandTable::builtin(DEFAULT_BREAKPOINTS.iter().copied())
    }

    #[test]
    fn test_builtin_property_aliases() {
        let table = builtin();

        assert_eq!(table.get("bg").unwrap().as_css(), "background-color");
        assert_eq!(table.get("zindex").unwrap().as_css(), "z-index");
        assert_eq!(table.get("align").unwrap().as_css(), "text-align");
    }

    #[test]
    fn test_builtin_compound_declarations() {
        let table = builtin();

        assert_eq!(
            table.get("flex"),
            Some(&Expansion::Compound("display: flex".to_string()))
        );
        assert_eq!(
            table.get("grid"),
            Some(&Expansion::Compound("display: grid".to_string()))
        );
    }

    #[test]
    fn test_builtin_pseudo_classes() {
        let table = builtin();

        assert_eq!(table.get("hover").unwrap().as_css(), ":hover");
        assert_eq!(table.get("active").unwrap().as_css(), ":active");
        assert_eq!(table.get("focus").unwrap().as_css(), ":focus");
    }

    #[test]
    fn test_builtin_derives_breakpoint_media_queries() {
        let table = builtin();

        assert_eq!(
            table.get("sm"),
            Some(&Expansion::MediaQuery(
                "@media (max-width: 640px)".to_string()
            ))
        );
        assert_eq!(
            table.get("xxl").unwrap().as_css(),
            "@media (max-width: 1600px)"
        );
    }

    #[test]
    fn test_var_ref_only_matches_var_entries() {
        let table = builtin();

        assert_eq!(table.var_ref("primary"), Some("var(--primary-color)"));
        assert_eq!(table.var_ref("secondary"), Some("var(--secondary-color)"));
        // Property aliases and breakpoints never substitute in value position.
        assert_eq!(table.var_ref("bg"), None);
        assert_eq!(table.var_ref("sm"), None);
        assert_eq!(table.var_ref("20px"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut table = ShorthandTable::new();
        table.insert("foo", Expansion::Property("flex".to_string()));
        table.insert("foo", Expansion::Property("float".to_string()));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("foo").unwrap().as_css(), "float");
    }

    #[test]
    fn test_unknown_token_misses() {
        let table = builtin();

        assert!(table.get("unknown-token").is_none());
        assert!(!table.has("unknown-token"));
    }
}
