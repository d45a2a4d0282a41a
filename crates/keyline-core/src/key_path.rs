//! Dotted key paths.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered, non-empty list of non-empty key segments.
///
/// Parsed from a dotted string: `server.database.user` addresses the `user`
/// key inside `database` inside `server`. Segments are compared to mapping
/// keys verbatim, without case folding or wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub const SEPARATOR: char = '.';

    /// Build a path from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(Error::invalid_key_path("", "key path is empty"));
        }
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_key_path(
                segments.join("."),
                "key path contains an empty segment",
            ));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

}

impl FromStr for KeyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_key_path(s, "key path is empty"));
        }
        Self::from_segments(s.split(Self::SEPARATOR))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
