// src/report.rs

//! Name-resolved, serializable views of the core results.
//!
//! The order and validation algorithms speak in [`FileId`]s; these structs
//! resolve ids back to file names for output, and derive `Serialize` so
//! `--format json` is just a `serde_json` call away.

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog::{FileCatalog, FileId};
use crate::dag::validate::ValidationReport;
use crate::errors::CoreError;

/// Computed processing order, resolved to names.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReport {
    pub files: Vec<OrderedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderedFile {
    pub id: FileId,
    pub name: String,
}

impl OrderReport {
    pub fn resolve(order: &[FileId], catalog: &FileCatalog) -> Result<Self, CoreError> {
        let mut files = Vec::with_capacity(order.len());
        for &id in order {
            files.push(OrderedFile {
                id,
                name: catalog.name_of(id)?.to_string(),
            });
        }
        Ok(Self { files })
    }

    /// One file name per line, dependencies first.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for file in &self.files {
            let _ = writeln!(out, "{}", file.name);
        }
        out
    }
}

/// Validation outcome, resolved to names.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub ok: bool,
    pub violations: Vec<CheckViolation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckViolation {
    pub file: String,
    pub missing: Vec<String>,
}

impl CheckReport {
    pub fn resolve(
        report: &ValidationReport,
        catalog: &FileCatalog,
    ) -> Result<Self, CoreError> {
        let mut violations = Vec::with_capacity(report.violations.len());
        for v in &report.violations {
            let mut missing = Vec::with_capacity(v.missing.len());
            for &dep in &v.missing {
                missing.push(catalog.name_of(dep)?.to_string());
            }
            violations.push(CheckViolation {
                file: catalog.name_of(v.file)?.to_string(),
                missing,
            });
        }
        Ok(Self {
            ok: report.is_ok(),
            violations,
        })
    }

    /// Human-readable summary, one line per violating file.
    pub fn to_text(&self) -> String {
        if self.ok {
            return "order is correct\n".to_string();
        }
        let mut out = String::from("order is incorrect\n");
        for v in &self.violations {
            let _ = writeln!(
                out,
                "  {} listed before its dependencies: {}",
                v.file,
                v.missing.join(", ")
            );
        }
        out
    }
}
