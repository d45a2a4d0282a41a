//! Conversion of resolved key ranges into editor locations.

use keyline_source_map::{Range, first_non_blank_column, line_at, line_number};
use serde::Serialize;
use std::path::PathBuf;

/// Where a key was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Line number (1-based)
    pub line: usize,
    /// Indentation of the line (0-based), when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

/// Knobs for a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Also report the column of the first non-blank character on the line.
    pub column: bool,
}

impl LookupOptions {
    pub fn with_column() -> Self {
        Self { column: true }
    }
}

/// Turn the start of `range` into a [`Location`] within `content`.
///
/// `path` is stored as given; callers pass the already-resolved absolute path.
pub fn to_location(
    content: &str,
    range: Range,
    path: impl Into<PathBuf>,
    options: &LookupOptions,
) -> Location {
    let offset = range.start.min(content.len());
    let column = options
        .column
        .then(|| first_non_blank_column(line_at(content, offset)));

    Location {
        path: path.into(),
        line: line_number(content, offset),
        column,
    }
}
