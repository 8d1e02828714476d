// src/dag/mod.rs

//! Dependency graph and the two algorithms that consume it.
//!
//! - [`graph`] holds the immutable id-indexed dependency graph.
//! - [`build`] derives that graph from catalogued files and their text.
//! - [`toposort`] computes one valid processing order (or reports a cycle).
//! - [`validate`] checks an externally supplied order against the graph.

pub mod build;
pub mod graph;
pub mod toposort;
pub mod validate;

pub use build::build_graph;
pub use graph::DependencyGraph;
pub use toposort::topological_order;
pub use validate::{ValidationReport, Violation, validate_order};
