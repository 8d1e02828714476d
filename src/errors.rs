// src/errors.rs

//! Crate-wide error types.
//!
//! [`CoreError`] covers every failure the catalog/graph/order layers can
//! produce; app-level plumbing (directory listing, reading an order file)
//! stays on plain `anyhow` with context, and `CoreError` converts into
//! `anyhow::Error` at the `run()` boundary via `?`.

use thiserror::Error;

pub use anyhow::{Error, Result};

use crate::catalog::FileId;

/// Structured failures from the core of the resolver.
///
/// Note that dependency *violations* found when checking a candidate order
/// are not errors; they are the expected output of a successful check (see
/// [`crate::dag::validate::ValidationReport`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A name was looked up that was never catalogued.
    #[error("unknown file name '{name}'")]
    UnknownFile { name: String },

    /// A file id outside the assigned range was looked up.
    #[error("file id {id} is out of range (catalog holds {len} files)")]
    InvalidId { id: u32, len: u32 },

    /// A line carries the include marker but no parsable quoted name.
    #[error("malformed include directive in '{file}' line {line_no}: {line}")]
    MalformedDirective {
        file: String,
        line_no: usize,
        line: String,
    },

    /// An include names a file that is not in the catalogued directory.
    #[error("'{file}' includes '{reference}', which is not in the scanned directory")]
    DependencyOnUnknownFile { file: String, reference: String },

    /// The dependency graph contains a cycle; no order exists.
    #[error("cyclic dependency involving '{file}'")]
    CyclicDependency { file: String },

    /// A candidate order contains an id that was never catalogued.
    #[error("order entry {position} references unknown file id {id}")]
    UnknownFileInOrder { id: u32, position: usize },
}

impl CoreError {
    pub(crate) fn invalid_id(id: FileId, len: usize) -> Self {
        CoreError::InvalidId {
            id: id.as_u32(),
            len: len as u32,
        }
    }
}
