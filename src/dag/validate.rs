// src/dag/validate.rs

//! Checking an externally supplied order against the dependency graph.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::FileId;
use crate::dag::graph::DependencyGraph;
use crate::errors::CoreError;

/// One file that appeared before some of its dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub file: FileId,
    /// Direct dependencies not yet seen when `file` was checked, in
    /// ascending id order.
    pub missing: Vec<FileId>,
}

/// Outcome of checking one candidate order.
///
/// A report with violations is a *successful* check that found problems;
/// only malformed input (an id outside the catalog) fails the call itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Walk `candidate` left to right and collect every dependency violation.
///
/// Each entry is checked against the set of files already passed: any
/// direct dependency not yet in that set is recorded as missing. The entry
/// then joins the set whether or not it violated, so later files are judged
/// against everything listed before them, valid or not. Every violating
/// file is reported with all of its missing dependencies; the walk never
/// stops at the first problem.
///
/// The candidate may omit files or repeat them. Duplicates are tolerated:
/// the first occurrence marks the file as passed, later occurrences are
/// checked like any entry but change nothing. An id that was never
/// catalogued is a hard [`CoreError::UnknownFileInOrder`] failure.
pub fn validate_order(
    graph: &DependencyGraph,
    candidate: &[FileId],
) -> Result<ValidationReport, CoreError> {
    let mut satisfied: BTreeSet<FileId> = BTreeSet::new();
    let mut violations = Vec::new();

    for (position, &file) in candidate.iter().enumerate() {
        if !graph.contains(file) {
            return Err(CoreError::UnknownFileInOrder {
                id: file.as_u32(),
                position,
            });
        }

        let missing: Vec<FileId> = graph
            .dependencies_of(file)
            .iter()
            .copied()
            .filter(|dep| !satisfied.contains(dep))
            .collect();

        if !missing.is_empty() {
            violations.push(Violation { file, missing });
        }

        satisfied.insert(file);
    }

    debug!(
        entries = candidate.len(),
        violations = violations.len(),
        "order checked"
    );
    Ok(ValidationReport { violations })
}
