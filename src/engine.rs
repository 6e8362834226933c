//! The shorthand style engine.

use std::collections::BTreeMap;

use crate::config::{EngineConfig, InitialTheme};
use crate::document::{Document, Element, ResourceLoader};
use crate::parser::{self, Declaration, RuleBlock, Skipped};
use crate::shorthand::{media_query, Expansion, ShorthandTable, DEFAULT_BREAKPOINTS};
use crate::theme::{builtin_themes, detect_color_mode, Theme};

/// Expands shorthand rule text into standard CSS and applies it to a
/// [`Document`].
///
/// The engine is an explicitly constructed, owned value; pass it by
/// reference to the call sites that need it. Expansion is a pure function of
/// the current theme and the shorthand/theme tables at call time: changing
/// the theme later never rewrites stylesheets that were already injected.
///
/// # Example
///
/// ```rust
/// use stenocss::StyleEngine;
///
/// let engine = StyleEngine::with_defaults();
/// let css = engine.expand(".box { bg: primary; padding: 20px; }");
/// assert_eq!(css, ".box { background-color: var(--primary-color); padding: 20px; }");
/// ```
#[derive(Debug, Clone)]
pub struct StyleEngine {
    config: EngineConfig,
    theme: String,
    mappings: ShorthandTable,
    themes: BTreeMap<String, Theme>,
    breakpoints: BTreeMap<String, String>,
    custom: CustomStyleRegistry,
}

impl StyleEngine {
    /// Creates an engine with the built-in shorthand table, the default
    /// breakpoints, and the two built-in themes.
    pub fn new(config: EngineConfig) -> Self {
        let breakpoints: BTreeMap<String, String> = DEFAULT_BREAKPOINTS
            .iter()
            .map(|(name, size)| (name.to_string(), size.to_string()))
            .collect();
        let mappings = ShorthandTable::builtin(DEFAULT_BREAKPOINTS.iter().copied());
        let theme = match &config.initial_theme {
            InitialTheme::Fixed(name) => name.clone(),
            InitialTheme::Detect => detect_color_mode().theme_name().to_string(),
        };

        Self {
            config,
            theme,
            mappings,
            themes: builtin_themes(),
            breakpoints,
            custom: CustomStyleRegistry::default(),
        }
    }

    /// Creates an engine with the default configuration (the richer
    /// variant: external sources and custom styles enabled).
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current theme name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The shorthand table.
    pub fn mappings(&self) -> &ShorthandTable {
        &self.mappings
    }

    /// Looks up a registered breakpoint width.
    pub fn breakpoint(&self, name: &str) -> Option<&str> {
        self.breakpoints.get(name).map(String::as_str)
    }

    /// Collects shorthand sources from the document and applies them.
    ///
    /// 1. When external sources are enabled, every linked reference ending
    ///    in the configured extension is loaded; each success is expanded
    ///    and injected, each failure is reported and skipped without
    ///    aborting the remaining resources.
    /// 2. Every inline element with the configured tag is expanded, injected,
    ///    and removed from the document (one-shot consumption).
    /// 3. The current theme's custom properties are applied to the root.
    ///
    /// The contract makes no ordering promise between external-resource
    /// styles and inline styles; in the original the fetches were
    /// asynchronous and could land on either side of the inline pass.
    pub fn process_document(&self, doc: &mut Document, loader: &dyn ResourceLoader) {
        if self.config.external_sources {
            let hrefs: Vec<String> = doc
                .links()
                .iter()
                .filter(|href| href.ends_with(&self.config.file_extension))
                .cloned()
                .collect();
            for href in hrefs {
                match loader.load(&href) {
                    Ok(text) => self.expand_and_inject(&text, doc),
                    Err(err) => log::error!("error loading {href}: {err}"),
                }
            }
        }

        for text in doc.take_inline(&self.config.element_tag) {
            self.expand_and_inject(&text, doc);
        }

        self.apply_theme(doc);
    }

    /// Expands shorthand rule text and appends the result to the document
    /// head as one new stylesheet.
    ///
    /// Every call appends; earlier stylesheets are never merged or replaced.
    pub fn expand_and_inject(&self, rule_text: &str, doc: &mut Document) {
        doc.push_stylesheet(self.expand(rule_text));
    }

    /// Expands shorthand rule text into standard CSS.
    ///
    /// Malformed fragments are dropped; use
    /// [`expand_with_diagnostics`](Self::expand_with_diagnostics) to observe
    /// them.
    pub fn expand(&self, rule_text: &str) -> String {
        self.expand_with_diagnostics(rule_text).0
    }

    /// Expands shorthand rule text, also returning the dropped fragments.
    pub fn expand_with_diagnostics(&self, rule_text: &str) -> (String, Vec<Skipped>) {
        let (blocks, skipped) = parser::parse_with_diagnostics(rule_text);
        for fragment in &skipped {
            log::debug!("skipped {fragment}");
        }
        let css = blocks
            .iter()
            .map(|block| self.expand_block(block))
            .collect::<Vec<_>>()
            .join("\n");
        (css, skipped)
    }

    fn expand_block(&self, block: &RuleBlock) -> String {
        let declarations: Vec<String> = block
            .declarations
            .iter()
            .map(|d| self.map_declaration(&d.token, &d.value))
            .collect();
        if declarations.is_empty() {
            format!("{} {{ }}", block.selector)
        } else {
            format!("{} {{ {} }}", block.selector, declarations.join(" "))
        }
    }

    /// Expands one `token: value` pair into a `property: value;` fragment.
    ///
    /// The property is the shorthand table's expansion of the token, or the
    /// token verbatim when unmapped (unknown tokens are assumed to already
    /// be valid CSS). The value is converted through the current theme:
    /// known custom-property names substitute to their literal color at
    /// expansion time, `primary`/`secondary` resolve to their `var(--…)`
    /// reference, anything else passes through unchanged.
    pub fn map_declaration(&self, token: &str, raw_value: &str) -> String {
        let property = self
            .mappings
            .get(token)
            .map(Expansion::as_css)
            .unwrap_or(token);
        let value = self.convert_value(raw_value);
        format!("{property}: {value};")
    }

    fn convert_value<'a>(&'a self, raw: &'a str) -> &'a str {
        if let Some(theme) = self.themes.get(&self.theme) {
            if let Some(literal) = theme.get(raw) {
                return literal;
            }
        }
        if let Some(reference) = self.mappings.var_ref(raw) {
            return reference;
        }
        raw
    }

    /// Writes every custom-property entry of the current theme onto the
    /// document root.
    ///
    /// An undefined current theme applies nothing; switching to one is not
    /// guarded anywhere.
    pub fn apply_theme(&self, doc: &mut Document) {
        let Some(theme) = self.themes.get(&self.theme) else {
            log::debug!("theme '{}' is not defined, no root properties applied", self.theme);
            return;
        };
        for (name, value) in theme.variables() {
            doc.set_root_property(name, value);
        }
    }

    /// Reassigns the current theme and re-applies it to the document root.
    ///
    /// Previously injected stylesheets are not re-expanded: values that were
    /// substituted to literals at injection time keep the old theme's
    /// colors, while `var(--…)` references (from the `primary`/`secondary`
    /// tokens) resolve against the updated root and track the new theme
    /// live.
    pub fn set_theme(&mut self, name: &str, doc: &mut Document) {
        self.theme = name.to_string();
        self.apply_theme(doc);
    }

    /// Registers a breakpoint and derives its media-query shorthand entry.
    ///
    /// Already-injected rules are not rewritten.
    pub fn add_breakpoint(&mut self, name: &str, size: &str) {
        self.breakpoints.insert(name.to_string(), size.to_string());
        self.mappings
            .insert(name, Expansion::MediaQuery(media_query(size)));
    }

    /// Appends a declaration set for `selector` and re-renders the whole
    /// accumulated registry into one brand-new stylesheet.
    ///
    /// Earlier renders stay in the document head, shadowed by the cascade.
    /// When the custom-style registry is disabled by configuration the call
    /// is a logged no-op.
    pub fn add_custom_style(
        &mut self,
        selector: &str,
        declarations: &[(&str, &str)],
        doc: &mut Document,
    ) {
        if !self.config.custom_styles {
            log::debug!("custom styles are disabled, ignoring declaration set for '{selector}'");
            return;
        }
        self.custom.push(selector, declarations);
        doc.push_stylesheet(self.render_custom_styles());
    }

    fn render_custom_styles(&self) -> String {
        let mut rules = Vec::new();
        for entry in self.custom.entries() {
            let declarations: Vec<String> = entry
                .sets
                .iter()
                .flatten()
                .map(|d| self.map_declaration(&d.token, &d.value))
                .collect();
            if declarations.is_empty() {
                rules.push(format!("{} {{ }}", entry.selector));
            } else {
                rules.push(format!("{} {{ {} }}", entry.selector, declarations.join(" ")));
            }
        }
        rules.join("\n")
    }

    /// Sets an element's inline animation style to
    /// `"<animation> <duration> ease-in-out"`.
    ///
    /// The duration defaults to `1s`. An absent element is a no-op, never an
    /// error.
    pub fn apply_animation(
        &self,
        element: Option<&mut Element>,
        animation: &str,
        duration: Option<&str>,
    ) {
        if let Some(element) = element {
            let duration = duration.unwrap_or("1s");
            element.set_style("animation", &format!("{animation} {duration} ease-in-out"));
        }
    }
}

/// Accumulated custom declaration sets, replayed in full on every addition.
#[derive(Debug, Clone, Default)]
struct CustomStyleRegistry {
    entries: Vec<CustomEntry>,
}

#[derive(Debug, Clone)]
struct CustomEntry {
    selector: String,
    sets: Vec<Vec<Declaration>>,
}

impl CustomStyleRegistry {
    fn push(&mut self, selector: &str, declarations: &[(&str, &str)]) {
        let set: Vec<Declaration> = declarations
            .iter()
            .map(|(token, value)| Declaration::new(*token, *value))
            .collect();
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.selector == selector)
        {
            Some(entry) => entry.sets.push(set),
            None => self.entries.push(CustomEntry {
                selector: selector.to_string(),
                sets: vec![set],
            }),
        }
    }

    fn entries(&self) -> impl Iterator<Item = &CustomEntry> {
        self.entries.iter()
    }
}
