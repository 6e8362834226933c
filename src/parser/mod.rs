//! Shorthand rule parsing.
//!
//! This module turns raw shorthand rule text into a typed structure:
//!
//! - [`RuleBlock`]: one `selector { declarations }` unit
//! - [`Declaration`]: one `token: value` pair inside a block
//! - [`Skipped`]: a malformed fragment the parser dropped
//!
//! The grammar is deliberately flat: rules are split on `}`, a block on its
//! first `{`, declarations on `;`, and each declaration on its first `:`,
//! with every part trimmed. There is no nesting, no comments, and no escaping
//! of the delimiter characters inside values. Malformed fragments never abort
//! parsing; they are dropped and reported through the diagnostics variant so
//! the behavior stays explicit and testable.

mod rules;

pub use rules::{parse, parse_with_diagnostics, Declaration, RuleBlock, Skipped};
