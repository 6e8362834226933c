//! External resource loading.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Error from loading an external resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The reference did not resolve to a resource.
    NotFound { href: String },
    /// The resource exists but could not be read.
    Read { href: String, message: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound { href } => {
                write!(f, "resource not found: \"{}\"", href)
            }
            LoadError::Read { href, message } => {
                write!(f, "failed to read resource \"{}\": {}", href, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Fetches the text content of a linked resource.
///
/// This is the seam where the original's single asynchronous operation
/// lived. Each load completes and is handled in isolation: a failure is
/// reported and never aborts sibling loads, and callers get no ordering
/// promise between resources.
pub trait ResourceLoader {
    fn load(&self, href: &str) -> Result<String, LoadError>;
}

/// Loads resources from the filesystem, resolving hrefs against a root
/// directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    /// Creates a loader rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ResourceLoader for FsLoader {
    fn load(&self, href: &str) -> Result<String, LoadError> {
        let path = self.root.join(href);
        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    href: href.to_string(),
                }
            } else {
                LoadError::Read {
                    href: href.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}

/// Serves resources from an in-memory map.
///
/// Useful in tests and examples where no filesystem is wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    resources: HashMap<String, String>,
}

impl MemoryLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource under `href`.
    pub fn insert(&mut self, href: &str, content: &str) {
        self.resources.insert(href.to_string(), content.to_string());
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, href: &str) -> Result<String, LoadError> {
        self.resources
            .get(href)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                href: href.to_string(),
            })
    }
}
