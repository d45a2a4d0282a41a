//! Source positions for keyline
//!
//! This crate converts byte offsets produced by the YAML parser into the
//! positions an editor understands: a 1-based line number and the
//! indentation column of that line.
//!
//! # Example
//!
//! ```rust
//! use keyline_source_map::{Range, first_non_blank_column, line_at, line_number};
//!
//! let source = "server:\n  port: 80\n";
//! let range = Range::new(10, 14);
//!
//! assert_eq!(line_number(source, range.start), 2);
//! assert_eq!(first_non_blank_column(line_at(source, range.start)), 2);
//! ```

pub mod types;
pub mod utils;

pub use types::Range;
pub use utils::{first_non_blank_column, line_at, line_number};
