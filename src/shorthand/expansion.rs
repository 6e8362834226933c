//! Typed shorthand expansions.

/// What a shorthand token expands to.
///
/// In property position every variant stringifies verbatim via
/// [`as_css`](Expansion::as_css); the engine does not second-guess what CSS
/// results, so a pseudo-class or media-query token used as a property name
/// passes straight through. The variant matters in two places: breakpoints
/// materialize as [`MediaQuery`](Expansion::MediaQuery) entries, and only
/// [`VarRef`](Expansion::VarRef) entries substitute in value position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// A plain CSS property alias, e.g. `bg` → `background-color`.
    Property(String),
    /// A compound declaration fragment, e.g. `flex` → `display: flex`.
    Compound(String),
    /// A pseudo-class suffix, e.g. `hover` → `:hover`.
    PseudoClass(String),
    /// A media-query prefix, e.g. `sm` → `@media (max-width: 640px)`.
    MediaQuery(String),
    /// A CSS variable reference, e.g. `primary` → `var(--primary-color)`.
    ///
    /// Unlike the other variants this also applies in value position, so
    /// `bg: primary` resolves to `background-color: var(--primary-color)`
    /// and tracks later theme switches live.
    VarRef(String),
}

impl Expansion {
    /// The CSS text this expansion contributes, independent of variant.
    pub fn as_css(&self) -> &str {
        match self {
            Expansion::Property(s)
            | Expansion::Compound(s)
            | Expansion::PseudoClass(s)
            | Expansion::MediaQuery(s)
            | Expansion::VarRef(s) => s,
        }
    }
}

impl std::fmt::Display for Expansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}
