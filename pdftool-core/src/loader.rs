//! Resolution of source identifiers into document bytes

use crate::error::{PdfToolError, Result};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Optional prefix accepted on identifiers, kept for compatibility with
/// callers that address documents the way a classpath loader does
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// Resolves a source identifier into the full document contents
pub trait ResourceLoader: Send + Sync {
    /// Load the bytes behind `source`.
    ///
    /// Returns [`PdfToolError::SourceNotFound`] when nothing exists at the
    /// identifier.
    fn load(&self, source: &str) -> Result<Vec<u8>>;
}

/// Loads documents from files below a root directory
#[derive(Debug, Clone)]
pub struct FileSystemLoader {
    root: PathBuf,
}

impl FileSystemLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an identifier to a path below the root.
    ///
    /// Absolute paths and parent-directory components never resolve.
    pub fn resolve(&self, source: &str) -> Option<PathBuf> {
        let relative = Path::new(source.strip_prefix(CLASSPATH_PREFIX).unwrap_or(source));
        if relative.as_os_str().is_empty() {
            return None;
        }

        let mut path = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(path)
    }
}

impl ResourceLoader for FileSystemLoader {
    fn load(&self, source: &str) -> Result<Vec<u8>> {
        let path = self
            .resolve(source)
            .ok_or_else(|| PdfToolError::SourceNotFound(source.to_string()))?;

        if !path.is_file() {
            return Err(PdfToolError::SourceNotFound(source.to_string()));
        }

        debug!("Reading {}", path.display());
        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PdfToolError::SourceNotFound(source.to_string()),
            _ => PdfToolError::Io(e),
        })
    }
}

/// Serves documents from memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` under `source`, replacing any previous entry
    pub fn insert(&mut self, source: impl Into<String>, bytes: Vec<u8>) {
        self.resources.insert(source.into(), bytes);
    }

    pub fn with_resource(mut self, source: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(source, bytes);
        self
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, source: &str) -> Result<Vec<u8>> {
        let key = source.strip_prefix(CLASSPATH_PREFIX).unwrap_or(source);
        self.resources
            .get(key)
            .cloned()
            .ok_or_else(|| PdfToolError::SourceNotFound(source.to_string()))
    }
}
