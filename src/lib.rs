//! Shorthand stylesheet expansion with theme-aware value substitution.
//!
//! stenocss expands abbreviated style declarations (`bg: primary;
//! radius: 5px;`) into standard CSS and applies the result to an explicit
//! host-document model: inline shorthand elements and linked `.sncss`
//! resources are collected, expanded, and injected as stylesheets into the
//! document head, with the current theme's custom-property values written
//! onto the document root.
//!
//! # Quick start
//!
//! ```rust
//! use stenocss::{Document, MemoryLoader, StyleEngine};
//!
//! let mut engine = StyleEngine::with_defaults();
//!
//! let mut loader = MemoryLoader::new();
//! loader.insert("site.sncss", ".nav { align: center; size: 14px; }");
//!
//! let mut doc = Document::new();
//! doc.add_link("site.sncss");
//! doc.add_inline("stenocss", ".box { bg: primary; padding: 20px; }");
//!
//! engine.process_document(&mut doc, &loader);
//!
//! assert_eq!(doc.stylesheets().len(), 2);
//! assert_eq!(
//!     doc.stylesheets()[1],
//!     ".box { background-color: var(--primary-color); padding: 20px; }"
//! );
//!
//! // Switching the theme rewrites the root properties; stylesheets that
//! // reference them through var(--…) track the change live.
//! engine.set_theme("dark", &mut doc);
//! assert_eq!(doc.root_property("--primary-color"), Some("#2c3e50"));
//! ```
//!
//! # Expansion model
//!
//! A shorthand token resolves through the [`ShorthandTable`] to a typed
//! [`Expansion`]: a property alias, a compound declaration, a pseudo-class
//! suffix, a media-query prefix, or a `var(--…)` reference. Unknown tokens
//! pass through verbatim. Values resolve through the current [`Theme`]
//! first (known custom-property names substitute to their literal color at
//! expansion time), then through the `primary`/`secondary` variable
//! references, and otherwise pass through unchanged. The two resolution
//! families behave differently across theme switches: literals go stale,
//! `var(--…)` references stay live.

pub mod config;
pub mod document;
pub mod engine;
pub mod parser;
pub mod shorthand;
pub mod theme;
mod util;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{EngineConfig, InitialTheme};
pub use document::{Document, Element, FsLoader, LoadError, MemoryLoader, ResourceLoader};
pub use engine::StyleEngine;
pub use parser::{Declaration, RuleBlock, Skipped};
pub use shorthand::{Expansion, ShorthandTable, DEFAULT_BREAKPOINTS};
pub use theme::{builtin_themes, set_color_mode_detector, ColorMode, Theme};
pub use util::truncate_to_width;
