// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod parse;
pub mod report;
pub mod source;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::catalog::{FileCatalog, FileId};
use crate::cli::{CliArgs, OutputFormat};
use crate::dag::{DependencyGraph, build_graph, topological_order, validate_order};
use crate::parse::IncludeParser;
use crate::report::{CheckReport, OrderReport};
use crate::source::{DirSource, FileSource};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - directory discovery → catalog
/// - include parsing → dependency graph
/// - one of: order computation, order checking, DOT dump
/// - text/JSON rendering on stdout
///
/// Dependency violations found by `--check` are ordinary output, not
/// errors; only infrastructure failures (bad directory, malformed
/// directive, unknown reference, cycle, unparsable order input) return
/// `Err` and make the process exit non-zero.
pub fn run(args: &CliArgs) -> Result<()> {
    let source = DirSource::new(&args.dir, &args.ext);
    let (catalog, graph) = load_graph(&source)?;

    info!(
        files = catalog.len(),
        edges = graph.edge_count(),
        dir = %args.dir,
        "dependency graph ready"
    );

    if args.dump_graph {
        print!("{}", graph.to_dot(&catalog));
        return Ok(());
    }

    match &args.check {
        None => {
            let order = topological_order(&graph, &catalog)?;
            let report = OrderReport::resolve(&order, &catalog)?;
            emit(args.format, &report, OrderReport::to_text)
        }
        Some(path) => {
            let candidate = read_candidate_order(path)?;
            let result = validate_order(&graph, &candidate)?;
            let report = CheckReport::resolve(&result, &catalog)?;
            emit(args.format, &report, CheckReport::to_text)
        }
    }
}

/// Discover files through `source` and build catalog plus graph.
///
/// Shared by `run` and the integration tests; works against any
/// [`FileSource`] implementation.
pub fn load_graph(source: &dyn FileSource) -> Result<(FileCatalog, DependencyGraph)> {
    let names = source.list()?;
    if names.is_empty() {
        bail!("no matching files found");
    }

    let catalog = FileCatalog::from_names(names);
    debug!(files = catalog.len(), "catalog built");

    let parser = IncludeParser::new();
    let graph = build_graph(&catalog, source, &parser)?;
    Ok((catalog, graph))
}

/// Read a candidate order: whitespace-separated file ids from a file, or
/// from stdin when `path` is `-`.
fn read_candidate_order(path: &str) -> Result<Vec<FileId>> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading order from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading order file {path:?}"))?
    };

    let mut order = Vec::new();
    for token in text.split_whitespace() {
        let raw: u32 = token
            .parse()
            .with_context(|| format!("invalid file id {token:?} in order input"))?;
        order.push(FileId::new(raw));
    }

    debug!(entries = order.len(), "candidate order read");
    Ok(order)
}

fn emit<R, F>(format: OutputFormat, report: &R, to_text: F) -> Result<()>
where
    R: serde::Serialize,
    F: Fn(&R) -> String,
{
    match format {
        OutputFormat::Text => print!("{}", to_text(report)),
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(report).context("serializing report")?;
            println!("{rendered}");
        }
    }
    Ok(())
}
