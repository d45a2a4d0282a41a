//! YAML node tree with byte-range tracking.

use crate::Range;

/// A parsed YAML node.
///
/// Only the shape needed to locate keys is kept: mappings keep their entries
/// in declaration order (duplicates included), scalars keep their unquoted
/// text and core-schema type. Every variant carries the byte range it was parsed from; the
/// range is `None` only for nodes that do not correspond to located source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Mapping(Mapping),
    Sequence(Sequence),
    Scalar(Scalar),
    Alias(Alias),
}

/// An ordered list of key/value entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub entries: Vec<Entry>,
    pub range: Option<Range>,
}

/// A key/value pair inside a [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Node,
    /// `None` while the entry is still being built, or for synthesized entries.
    pub value: Option<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub items: Vec<Node>,
    pub range: Option<Range>,
}

/// A leaf value. `value` is the scalar's text after unquoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub value: String,
    pub kind: ScalarKind,
    pub range: Option<Range>,
}

/// Core-schema type of a scalar.
///
/// Only plain scalars are typed; quoted and block scalars are always
/// strings, so `"1"` is a string while `1` is an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

/// A `*alias` reference. Aliases are not expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub range: Option<Range>,
}

impl Node {
    /// Source range of this node, if it was located in the input.
    pub fn range(&self) -> Option<Range> {
        match self {
            Node::Mapping(mapping) => mapping.range,
            Node::Sequence(sequence) => sequence.range,
            Node::Scalar(scalar) => scalar.range,
            Node::Alias(alias) => alias.range,
        }
    }

    /// Get the mapping if this node exposes key/value entries.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

impl Scalar {
    pub fn is_string(&self) -> bool {
        self.kind == ScalarKind::String
    }
}

impl Mapping {
    /// First entry, in declaration order, whose key is a string scalar equal
    /// to `key`.
    ///
    /// Keys that are not strings never match: `1:`, `true:` and `~:` are an
    /// integer, a boolean and a null, while `"1":` is a string. Complex
    /// `? [a, b]` keys and aliases never match either.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| {
            entry
                .key
                .as_scalar()
                .is_some_and(|scalar| scalar.is_string() && scalar.value == key)
        })
    }
}
