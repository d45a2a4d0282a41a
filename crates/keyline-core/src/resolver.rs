//! Key path resolution over a parsed YAML tree.

use crate::KeyPath;
use keyline_yaml::{Node, Range};

/// Outcome of resolving a key path.
///
/// Both variants point at a key token, never at a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Every segment matched; the range of the last segment's key.
    Exact(Range),
    /// Only a prefix matched; the range of the deepest key that did.
    Nearest(Range),
}

impl Resolution {
    pub fn range(&self) -> Range {
        match self {
            Resolution::Exact(range) | Resolution::Nearest(range) => *range,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Resolution::Exact(_))
    }
}

/// Resolve `path` against `root`, one segment per mapping level.
///
/// At each level only the first key (in declaration order) equal to the
/// segment is considered. If the remaining segments cannot be resolved
/// below it, the lookup falls back to that key as [`Resolution::Nearest`].
/// A segment with no matching key at all is no match, so a fallback needs
/// at least the first segment to match at the root.
pub fn resolve(root: &Node, path: &KeyPath) -> Option<Resolution> {
    resolve_segments(root, path.segments(), 0)
}

fn resolve_segments(node: &Node, segments: &[String], depth: usize) -> Option<Resolution> {
    let (segment, rest) = segments.split_first()?;
    let mapping = node.as_mapping()?;
    let entry = mapping.find(segment)?;
    tracing::trace!(segment = %segment, depth, "matched key");

    let key_range = entry.key.range();
    if rest.is_empty() {
        return key_range.map(Resolution::Exact);
    }

    entry
        .value
        .as_ref()
        .and_then(|value| resolve_segments(value, rest, depth + 1))
        .or_else(|| key_range.map(Resolution::Nearest))
}
