// src/dag/graph.rs

use std::collections::BTreeSet;

use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;

use crate::catalog::{FileCatalog, FileId};

/// Immutable dependency graph over catalogued files.
///
/// Dense storage indexed by [`FileId`]: slot `i` holds the set of direct
/// dependencies of file `i`. Built once by [`crate::dag::build_graph`] and
/// read-only afterwards; total over the catalog (every id has a slot, empty
/// sets included).
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    deps: Vec<BTreeSet<FileId>>,
}

impl DependencyGraph {
    /// A graph with `len` files and no edges yet.
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            deps: vec![BTreeSet::new(); len],
        }
    }

    pub(crate) fn add_dependency(&mut self, file: FileId, dep: FileId) {
        self.deps[file.index()].insert(dep);
    }

    /// Number of files (equals the catalog size).
    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// True if `id` indexes a file in this graph.
    pub fn contains(&self, id: FileId) -> bool {
        id.index() < self.deps.len()
    }

    /// Direct dependencies of a file, in ascending id order.
    ///
    /// Out-of-range ids yield an empty set; callers that must distinguish
    /// that case check [`contains`](Self::contains) first.
    pub fn dependencies_of(&self, file: FileId) -> &BTreeSet<FileId> {
        static EMPTY: BTreeSet<FileId> = BTreeSet::new();
        self.deps.get(file.index()).unwrap_or(&EMPTY)
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = FileId> + '_ {
        (0..self.deps.len() as u32).map(FileId::new)
    }

    /// Total number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.deps.iter().map(BTreeSet::len).sum()
    }

    /// Render the graph in Graphviz DOT, nodes labelled with file names.
    ///
    /// Edge direction is dependency → dependent, so the drawing reads in
    /// processing order.
    pub fn to_dot(&self, catalog: &FileCatalog) -> String {
        // Edge weights are empty strings rather than `()` because the DOT
        // formatter requires `Display` weights even when labels are off.
        let mut g: DiGraph<&str, &str> = DiGraph::new();

        let nodes: Vec<_> = catalog.names().map(|name| g.add_node(name)).collect();
        for file in self.ids() {
            for &dep in self.dependencies_of(file) {
                g.add_edge(nodes[dep.index()], nodes[file.index()], "");
            }
        }

        format!("{}", Dot::with_config(&g, &[Config::EdgeNoLabel]))
    }
}
