//! # keyline-yaml
//!
//! YAML parsing with byte-range tracking.
//!
//! This crate turns YAML text into a small owned [`Node`] tree in which every
//! mapping, sequence, scalar and alias remembers the byte [`Range`] it came
//! from. The tree is read-only: nothing here writes YAML back out.
//!
//! ## Example
//!
//! ```rust
//! use keyline_yaml::parse;
//!
//! let content = "server:\n  port: 8080\n";
//!
//! let root = parse(content).unwrap().expect("document has content");
//! let server = root.as_mapping().unwrap().find("server").unwrap();
//! assert_eq!(server.key.range().unwrap().start, 0);
//! ```

mod error;
mod node;
mod parser;

pub use error::{Error, Result};
pub use keyline_source_map::Range;
pub use node::{Alias, Entry, Mapping, Node, Scalar, ScalarKind, Sequence};
pub use parser::parse;
