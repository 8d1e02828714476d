// src/catalog.rs

//! Bidirectional mapping between file names and dense integer ids.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::errors::CoreError;

/// Dense, zero-based identifier of a discovered file.
///
/// Assigned once during discovery, never reused or renumbered for the
/// lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FileId(u32);

impl FileId {
    pub const fn new(raw: u32) -> Self {
        FileId(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Index into catalog-sized dense storage.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Total bijection between file names and [`FileId`]s.
///
/// Ids increase in discovery order. Both lookup directions are O(1)
/// amortized: a `HashMap` for name→id and a `Vec` indexed by id for the
/// reverse. The catalog is only mutated during discovery; afterwards the
/// rest of the run holds it by shared reference, so its size is fixed.
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    name_to_id: HashMap<String, FileId>,
    id_to_name: Vec<String>,
}

impl FileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from names in discovery order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.assign(name.into());
        }
        catalog
    }

    /// Assign an id to `name`, or return the existing id if `name` is
    /// already catalogued. Ids are handed out in increasing order.
    pub fn assign(&mut self, name: impl Into<String>) -> FileId {
        let name = name.into();
        if let Some(&id) = self.name_to_id.get(&name) {
            return id;
        }
        let id = FileId(self.id_to_name.len() as u32);
        self.name_to_id.insert(name.clone(), id);
        self.id_to_name.push(name);
        id
    }

    /// Look up the id of a catalogued name.
    pub fn id_of(&self, name: &str) -> Result<FileId, CoreError> {
        self.get(name).ok_or_else(|| CoreError::UnknownFile {
            name: name.to_string(),
        })
    }

    /// Non-failing lookup, for callers that turn a miss into their own
    /// error (e.g. the graph builder's unknown-reference diagnostics).
    pub fn get(&self, name: &str) -> Option<FileId> {
        self.name_to_id.get(name).copied()
    }

    /// Look up the name behind an id.
    pub fn name_of(&self, id: FileId) -> Result<&str, CoreError> {
        self.id_to_name
            .get(id.index())
            .map(String::as_str)
            .ok_or_else(|| CoreError::invalid_id(id, self.len()))
    }

    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = FileId> + '_ {
        (0..self.id_to_name.len() as u32).map(FileId)
    }

    /// Names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.id_to_name.iter().map(String::as_str)
    }
}
