// src/parse.rs

//! Line-level parsing of include directives.
//!
//! A dependency-declaration line opens with the `#include` marker followed
//! by a double-quoted file name:
//!
//! ```text
//! #include "other.h"
//! ```
//!
//! Lines that do not open with the marker declare nothing. Lines that carry
//! the marker but no parsable quoted name (unterminated quote, empty name,
//! angle-bracket form) are classified as malformed; the graph builder turns
//! that into a hard [`MalformedDirective`](crate::errors::CoreError) error
//! rather than silently skipping the line.

use regex::Regex;

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// The line does not open with the include marker.
    NoDirective,
    /// The line declares a dependency on the named file.
    Reference(String),
    /// The marker is present but the quoted name is missing or unusable.
    Malformed,
}

/// Recognizer for dependency-declaration lines.
#[derive(Debug)]
pub struct IncludeParser {
    marker: &'static str,
    reference: Regex,
}

impl IncludeParser {
    pub fn new() -> Self {
        // Marker token, optional whitespace, then a non-empty name between
        // the first pair of double quotes.
        let reference = Regex::new(r#"^#include\s*"([^"]+)""#)
            .unwrap_or_else(|e| panic!("invalid include regex: {e}"));
        Self {
            marker: "#include",
            reference,
        }
    }

    /// Classify one line of source text.
    pub fn scan_line(&self, line: &str) -> ParsedLine {
        if !line.starts_with(self.marker) {
            return ParsedLine::NoDirective;
        }
        match self.reference.captures(line) {
            Some(caps) => ParsedLine::Reference(caps[1].to_string()),
            None => ParsedLine::Malformed,
        }
    }
}

impl Default for IncludeParser {
    fn default() -> Self {
        Self::new()
    }
}
