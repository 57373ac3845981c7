//! Named resource lookup for key and claims documents.
//!
//! Resource names are classpath-style: a leading `/` is ignored, so
//! `/privateKey.pem` and `privateKey.pem` name the same resource.

use crate::error::{TokenError, TokenResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves a resource name to its bytes.
pub trait ResourceLoader: Send + Sync {
    /// Read the whole resource.
    ///
    /// # Errors
    /// Returns [`TokenError::ResourceNotFound`] when no resource has that name.
    fn load(&self, name: &str) -> TokenResult<Vec<u8>>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn load(&self, name: &str) -> TokenResult<Vec<u8>> {
        (**self).load(name)
    }
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for std::sync::Arc<L> {
    fn load(&self, name: &str) -> TokenResult<Vec<u8>> {
        (**self).load(name)
    }
}

fn normalize(name: &str) -> &str {
    name.trim_start_matches('/')
}

/// Resources stored as files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Serve resources from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory resources are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a resource name resolves to.
    #[must_use]
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(normalize(name))
    }
}

impl ResourceLoader for DirectoryResources {
    fn load(&self, name: &str) -> TokenResult<Vec<u8>> {
        let path = self.resolve(name);
        tracing::trace!(resource = name, path = %path.display(), "Loading resource");
        if path.is_dir() {
            return Err(TokenError::resource_not_found(name));
        }
        std::fs::read(&path).map_err(|e| TokenError::from_io(name, e))
    }
}

/// Resources held in memory, keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    /// Create an empty resource set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource
    #[must_use]
    pub fn with(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    /// Add or replace a resource in place
    pub fn insert(&mut self, name: &str, content: impl Into<Vec<u8>>) {
        self.entries
            .insert(normalize(name).to_string(), content.into());
    }
}

impl ResourceLoader for MemoryResources {
    fn load(&self, name: &str) -> TokenResult<Vec<u8>> {
        self.entries
            .get(normalize(name))
            .cloned()
            .ok_or_else(|| TokenError::resource_not_found(name))
    }
}
