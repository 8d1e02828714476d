// src/source.rs

//! File-source abstraction.
//!
//! The resolver core never touches the filesystem directly; it works
//! against [`FileSource`], which hands out discovery-ordered names and full
//! file contents. [`DirSource`] is the real implementation over one flat
//! directory; [`MemorySource`] backs tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Provider of discovered file names and their contents.
pub trait FileSource {
    /// File names in discovery order. Determines [`crate::catalog::FileId`]
    /// assignment, so implementations must be deterministic.
    fn list(&self) -> Result<Vec<String>>;

    /// Full text of one discovered file.
    fn read(&self, name: &str) -> Result<String>;
}

/// Flat-directory source with an extension filter.
///
/// Only regular files whose extension equals `ext` are reported;
/// subdirectories are not descended into. Names are returned sorted so that
/// id assignment does not depend on platform `readdir` order.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    ext: String,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ext: ext.into(),
        }
    }
}

impl FileSource for DirSource {
    fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("reading directory {:?}", self.root))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("listing directory {:?}", self.root))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.ext.as_str()) {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => debug!(?path, "skipping non-UTF-8 file name"),
            }
        }
        names.sort();

        debug!(count = names.len(), root = ?self.root, "discovered files");
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        fs::read_to_string(&path).with_context(|| format!("reading file {:?}", path))
    }
}

/// In-memory source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(name.into(), contents.into());
    }
}

impl FileSource for MemorySource {
    fn list(&self) -> Result<Vec<String>> {
        // BTreeMap iteration is already sorted, mirroring DirSource.
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("no such in-memory file '{name}'"))
    }
}
