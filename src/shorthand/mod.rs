//! Shorthand token mappings.
//!
//! This module provides the core expansion primitives:
//!
//! - [`Expansion`]: what a shorthand token stands for
//! - [`ShorthandTable`]: a registry of token-to-expansion mappings
//!
//! The built-in table covers plain property aliases (`bg` →
//! `background-color`), compound declarations (`flex` → `display: flex`),
//! pseudo-class suffixes (`hover` → `:hover`), theme variable references
//! (`primary` → `var(--primary-color)`), and one derived media-query entry
//! per breakpoint.

mod expansion;
mod table;

pub use expansion::Expansion;
pub use table::{media_query, ShorthandTable, DEFAULT_BREAKPOINTS};
