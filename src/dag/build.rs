// src/dag/build.rs

//! Deriving the dependency graph from catalogued files.

use anyhow::Result;
use tracing::debug;

use crate::catalog::FileCatalog;
use crate::dag::graph::DependencyGraph;
use crate::errors::CoreError;
use crate::parse::{IncludeParser, ParsedLine};
use crate::source::FileSource;

/// Build the full dependency graph for every file in the catalog.
///
/// For each catalogued file the full text is fetched from `source`, every
/// line is classified by `parser`, and every reference is resolved through
/// the catalog. The build is all-or-nothing:
///
/// - a marker line without a parsable quoted name aborts with
///   [`CoreError::MalformedDirective`] naming the file and line number;
/// - a reference to a name outside the catalog aborts with
///   [`CoreError::DependencyOnUnknownFile`] naming both sides.
///
/// The result is total over the catalog; files with no includes get an
/// empty dependency set.
pub fn build_graph(
    catalog: &FileCatalog,
    source: &dyn FileSource,
    parser: &IncludeParser,
) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::with_len(catalog.len());

    for file in catalog.ids() {
        let name = catalog.name_of(file)?;
        let text = source.read(name)?;

        for (line_idx, line) in text.lines().enumerate() {
            match parser.scan_line(line) {
                ParsedLine::NoDirective => {}
                ParsedLine::Reference(reference) => {
                    let dep = catalog.get(&reference).ok_or_else(|| {
                        CoreError::DependencyOnUnknownFile {
                            file: name.to_string(),
                            reference: reference.clone(),
                        }
                    })?;
                    graph.add_dependency(file, dep);
                }
                ParsedLine::Malformed => {
                    return Err(CoreError::MalformedDirective {
                        file: name.to_string(),
                        line_no: line_idx + 1,
                        line: line.to_string(),
                    }
                    .into());
                }
            }
        }

        debug!(
            file = name,
            deps = graph.dependencies_of(file).len(),
            "parsed dependencies"
        );
    }

    debug!(
        files = graph.len(),
        edges = graph.edge_count(),
        "dependency graph built"
    );
    Ok(graph)
}
