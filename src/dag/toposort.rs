// src/dag/toposort.rs

//! Depth-first topological ordering with cycle detection.

use crate::catalog::{FileCatalog, FileId};
use crate::dag::graph::DependencyGraph;
use crate::errors::CoreError;

/// Three-color marking of a node during the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not yet reached.
    Unvisited,
    /// On the current traversal path; reaching it again means a cycle.
    InProgress,
    /// Fully processed and already placed in the order.
    Done,
}

/// Compute one valid processing order over all files in the graph.
///
/// Post-order depth-first traversal: a file is appended only after all of
/// its direct dependencies have been appended, so every dependency appears
/// strictly before its dependents. Roots are tried in ascending [`FileId`]
/// order, which makes the result deterministic for a given catalog.
///
/// A revisit of an in-progress node means the graph has a cycle; the whole
/// operation fails with [`CoreError::CyclicDependency`] naming a file on
/// the cycle, and no partial order is returned.
pub fn topological_order(
    graph: &DependencyGraph,
    catalog: &FileCatalog,
) -> Result<Vec<FileId>, CoreError> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut order = Vec::with_capacity(graph.len());

    for root in graph.ids() {
        if marks[root.index()] == Mark::Unvisited {
            visit(graph, catalog, root, &mut marks, &mut order)?;
        }
    }

    debug_assert_eq!(order.len(), graph.len());
    Ok(order)
}

fn visit(
    graph: &DependencyGraph,
    catalog: &FileCatalog,
    file: FileId,
    marks: &mut [Mark],
    order: &mut Vec<FileId>,
) -> Result<(), CoreError> {
    marks[file.index()] = Mark::InProgress;

    for &dep in graph.dependencies_of(file) {
        match marks[dep.index()] {
            Mark::Unvisited => visit(graph, catalog, dep, marks, order)?,
            Mark::InProgress => {
                // Covers self-includes as the one-node cycle.
                return Err(CoreError::CyclicDependency {
                    file: catalog.name_of(dep)?.to_string(),
                });
            }
            Mark::Done => {}
        }
    }

    marks[file.index()] = Mark::Done;
    order.push(file);
    Ok(())
}
