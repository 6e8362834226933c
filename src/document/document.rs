//! Document and element state.

use std::collections::BTreeMap;

/// An inline custom element carrying shorthand rule text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InlineElement {
    tag: String,
    text: String,
}

/// An explicit model of the host page.
///
/// # Example
///
/// ```rust
/// use stenocss::{Document, MemoryLoader, StyleEngine};
///
/// let engine = StyleEngine::with_defaults();
/// let mut doc = Document::new();
/// doc.add_inline("stenocss", ".box { bg: primary; }");
///
/// engine.process_document(&mut doc, &MemoryLoader::new());
/// assert_eq!(doc.stylesheets().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    links: Vec<String>,
    inline: Vec<InlineElement>,
    stylesheets: Vec<String>,
    root_style: BTreeMap<String, String>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a linked resource reference.
    pub fn add_link(&mut self, href: &str) {
        self.links.push(href.to_string());
    }

    /// The linked resource references, in registration order.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Adds an inline element with the given tag and shorthand text content.
    pub fn add_inline(&mut self, tag: &str, text: &str) {
        self.inline.push(InlineElement {
            tag: tag.to_string(),
            text: text.to_string(),
        });
    }

    /// Removes every inline element with the given tag, returning their text
    /// contents in document order.
    ///
    /// This is the one-shot consumption step: once taken, re-adding an
    /// identical element later has no automatic effect. Elements with other
    /// tags are left in place.
    pub fn take_inline(&mut self, tag: &str) -> Vec<String> {
        let mut taken = Vec::new();
        self.inline.retain(|element| {
            if element.tag == tag {
                taken.push(element.text.clone());
                false
            } else {
                true
            }
        });
        taken
    }

    /// Number of inline elements still present.
    pub fn inline_len(&self) -> usize {
        self.inline.len()
    }

    /// Appends a generated stylesheet to the head.
    pub fn push_stylesheet(&mut self, css: String) {
        self.stylesheets.push(css);
    }

    /// The generated stylesheets, in injection order.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Sets a custom-property value on the document root.
    pub fn set_root_property(&mut self, name: &str, value: &str) {
        self.root_style.insert(name.to_string(), value.to_string());
    }

    /// Looks up a custom-property value on the document root.
    pub fn root_property(&self, name: &str) -> Option<&str> {
        self.root_style.get(name).map(String::as_str)
    }

    /// The root custom-property values.
    pub fn root_properties(&self) -> &BTreeMap<String, String> {
        &self.root_style
    }
}

/// A styleable element, the target of inline animation styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    inline_style: BTreeMap<String, String>,
}

impl Element {
    /// Creates an element with no inline styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an inline style property.
    pub fn set_style(&mut self, name: &str, value: &str) {
        self.inline_style.insert(name.to_string(), value.to_string());
    }

    /// Looks up an inline style property.
    pub fn style(&self, name: &str) -> Option<&str> {
        self.inline_style.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_inline_consumes_matching_tags_only() {
        let mut doc = Document::new();
        doc.add_inline("stenocss", ".a { color: red; }");
        doc.add_inline("other", "not ours");
        doc.add_inline("stenocss", ".b { margin: 0; }");

        let taken = doc.take_inline("stenocss");

        assert_eq!(taken, vec![".a { color: red; }", ".b { margin: 0; }"]);
        assert_eq!(doc.inline_len(), 1);

        // One-shot: a second take finds nothing.
        assert!(doc.take_inline("stenocss").is_empty());
    }

    #[test]
    fn test_stylesheets_accumulate_in_order() {
        let mut doc = Document::new();
        doc.push_stylesheet(".a { }".to_string());
        doc.push_stylesheet(".b { }".to_string());

        assert_eq!(doc.stylesheets(), &[".a { }".to_string(), ".b { }".to_string()]);
    }

    #[test]
    fn test_root_properties_overwrite() {
        let mut doc = Document::new();
        doc.set_root_property("--primary-color", "#3498db");
        doc.set_root_property("--primary-color", "#2c3e50");

        assert_eq!(doc.root_property("--primary-color"), Some("#2c3e50"));
        assert_eq!(doc.root_properties().len(), 1);
    }

    #[test]
    fn test_element_styles() {
        let mut element = Element::new();
        assert_eq!(element.style("animation"), None);

        element.set_style("animation", "fade-in 1s ease-in-out");
        assert_eq!(element.style("animation"), Some("fade-in 1s ease-in-out"));
    }
}
