//! Theme system for swappable custom-property sets.
//!
//! This module provides:
//!
//! - [`Theme`]: a named set of CSS custom-property values with a fluent
//!   builder API
//! - [`builtin_themes`]: the two predefined themes, `light` and `dark`
//! - [`ColorMode`]: light or dark color mode, with OS detection
//!
//! A theme is applied by writing its custom-property values onto the
//! document root; injected stylesheets that reference those properties via
//! `var(--…)` track theme switches live.

mod adaptive;
mod builtin;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_color_mode_detector, ColorMode};
pub use builtin::{builtin_themes, DARK_THEME, LIGHT_THEME};
pub use theme::Theme;

pub(crate) use adaptive::detect_color_mode;
