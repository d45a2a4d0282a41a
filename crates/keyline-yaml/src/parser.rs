//! YAML parser that builds byte-range annotated [`Node`] trees.

use crate::{Alias, Entry, Error, Mapping, Node, Range, Result, Scalar, ScalarKind, Sequence};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse YAML from a string, producing a [`Node`] tree.
///
/// This parses a single YAML document. If the input contains multiple
/// documents, only the first one is parsed. Returns `Ok(None)` when the
/// document has no content (empty input, only comments or whitespace).
///
/// # Example
///
/// ```rust
/// use keyline_yaml::parse;
///
/// let root = parse("title: My Document").unwrap().unwrap();
/// assert!(root.as_mapping().is_some());
///
/// assert!(parse("# nothing here\n").unwrap().is_none());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is syntactically invalid.
pub fn parse(content: &str) -> Result<Option<Node>> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::new(content);

    parser.load(&mut builder, false)?; // false = single document only

    let root = builder.result()?;
    tracing::trace!(bytes = content.len(), empty = root.is_none(), "parsed YAML document");
    Ok(root)
}

/// Maps yaml-rust2 marker indices, which count characters, to byte offsets.
struct CharOffsets {
    /// Byte offset of every char; `None` when the source is ASCII and the two agree.
    offsets: Option<Vec<usize>>,
    len: usize,
}

impl CharOffsets {
    fn new(source: &str) -> Self {
        let offsets = if source.is_ascii() {
            None
        } else {
            Some(source.char_indices().map(|(idx, _)| idx).collect())
        };
        Self {
            offsets,
            len: source.len(),
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        match &self.offsets {
            None => char_index.min(self.len),
            Some(offsets) => offsets.get(char_index).copied().unwrap_or(self.len),
        }
    }
}

/// Receives marked parser events and assembles the node tree.
struct TreeBuilder {
    offsets: CharOffsets,

    /// Collections being constructed, innermost last
    stack: Vec<BuildNode>,

    /// The completed root node
    root: Option<Node>,

    /// First structural problem seen; events cannot return errors directly
    error: Option<Error>,
}

/// A collection being constructed during parsing.
enum BuildNode {
    Sequence {
        start_marker: Marker,
        items: Vec<Node>,
    },

    Mapping {
        start_marker: Marker,
        entries: Vec<Entry>,
    },
}

impl TreeBuilder {
    fn new(source: &str) -> Self {
        Self {
            offsets: CharOffsets::new(source),
            stack: Vec::new(),
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<Option<Node>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.stack.is_empty() {
            return Err(Error::InvalidStructure(
                "document ended inside an open collection".into(),
            ));
        }
        Ok(self.root)
    }

    fn fail(&mut self, message: &str) {
        if self.error.is_none() {
            self.error = Some(Error::InvalidStructure(message.into()));
        }
    }

    fn push_complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            // This is the root
            None => self.root = Some(node),
            Some(BuildNode::Sequence { items, .. }) => items.push(node),
            Some(BuildNode::Mapping { entries, .. }) => match entries.last_mut() {
                Some(entry) if entry.value.is_none() => entry.value = Some(node),
                // This is a new key
                _ => entries.push(Entry {
                    key: node,
                    value: None,
                }),
            },
        }
    }

    fn range_between(&self, start: &Marker, end: &Marker) -> Range {
        Range::new(
            self.offsets.byte_offset(start.index()),
            self.offsets.byte_offset(end.index()),
        )
    }

    /// Range of a scalar token.
    ///
    /// The marker gives the start; the end is estimated from the unquoted
    /// value plus its quotes. Escapes and folded block scalars make this an
    /// approximation, which is fine since only the start is used for lookups.
    fn scalar_range(&self, marker: &Marker, value: &str, quoted: bool) -> Range {
        let quotes = if quoted { 2 } else { 0 };
        let start = marker.index();
        let end = start + value.chars().count() + quotes;
        Range::new(
            self.offsets.byte_offset(start),
            self.offsets.byte_offset(end),
        )
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Scalar(value, style, _anchor_id, _tag) => {
                let quoted = matches!(
                    style,
                    TScalarStyle::SingleQuoted | TScalarStyle::DoubleQuoted
                );
                let range = self.scalar_range(&marker, &value, quoted);
                let kind = match style {
                    TScalarStyle::Plain => plain_scalar_kind(&value),
                    _ => ScalarKind::String,
                };
                self.push_complete(Node::Scalar(Scalar {
                    value,
                    kind,
                    range: Some(range),
                }));
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Sequence {
                    start_marker: marker,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => match self.stack.pop() {
                Some(BuildNode::Sequence {
                    start_marker,
                    items,
                }) => {
                    let range = self.range_between(&start_marker, &marker);
                    self.push_complete(Node::Sequence(Sequence {
                        items,
                        range: Some(range),
                    }));
                }
                _ => self.fail("sequence end without a matching start"),
            },

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    start_marker: marker,
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => match self.stack.pop() {
                Some(BuildNode::Mapping {
                    start_marker,
                    entries,
                }) => {
                    let range = self.range_between(&start_marker, &marker);
                    self.push_complete(Node::Mapping(Mapping {
                        entries,
                        range: Some(range),
                    }));
                }
                _ => self.fail("mapping end without a matching start"),
            },

            Event::Alias(_anchor_id) => {
                let offset = self.offsets.byte_offset(marker.index());
                self.push_complete(Node::Alias(Alias {
                    range: Some(Range::new(offset, offset)),
                }));
            }

            // Stream and document boundaries carry no nodes
            _ => {}
        }
    }
}

/// Resolve the YAML 1.2 core-schema type of a plain scalar.
///
/// Only the spellings the core schema lists are typed, so `yes`, `on` and
/// `0b1` stay strings.
fn plain_scalar_kind(value: &str) -> ScalarKind {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => return ScalarKind::Null,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => return ScalarKind::Boolean,
        _ => {}
    }

    if is_core_int(value) {
        ScalarKind::Integer
    } else if is_core_float(value) {
        ScalarKind::Float
    } else {
        ScalarKind::String
    }
}

fn is_core_int(value: &str) -> bool {
    if let Some(octal) = value.strip_prefix("0o") {
        return !octal.is_empty() && octal.bytes().all(|b| (b'0'..=b'7').contains(&b));
    }
    if let Some(hex) = value.strip_prefix("0x") {
        return !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_core_float(value: &str) -> bool {
    if matches!(value, ".nan" | ".NaN" | ".NAN") {
        return true;
    }
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    if matches!(unsigned, ".inf" | ".Inf" | ".INF") {
        return true;
    }

    // [0-9]* ( . [0-9]* )? ( [eE] [-+]? [0-9]+ )?, with at least one mantissa digit
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return false;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['-', '+']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}
