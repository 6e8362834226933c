//! Host-document model and resource loading.
//!
//! The engine does not talk to a browser DOM; it operates on an explicit
//! [`Document`] owned by the caller:
//!
//! - linked resource references (the `<link href="…">` analog)
//! - inline shorthand elements, consumed once when processed
//! - the head, an ordered list of generated stylesheets
//! - root custom-property values (the `documentElement` inline style analog)
//!
//! External resources are fetched through the [`ResourceLoader`] seam.
//! [`FsLoader`] reads them from a directory; [`MemoryLoader`] serves them
//! from memory, which is mostly useful in tests and examples.

mod document;
mod loader;

pub use document::{Document, Element};
pub use loader::{FsLoader, LoadError, MemoryLoader, ResourceLoader};
