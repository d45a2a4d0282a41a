//! Utility functions for working with source positions

/// 1-based line number of the line containing `offset`.
///
/// Counts the `\n` bytes before `offset`, so blank lines, comments and
/// anything else preceding the offset all count. Offsets past the end of
/// `source` are clamped to its length.
pub fn line_number(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    memchr::memchr_iter(b'\n', &source.as_bytes()[..offset]).count() + 1
}

/// The full text of the line containing `offset`, without its terminator.
///
/// A trailing `\r` from CRLF line endings is kept; it never affects the
/// indentation scan in [`first_non_blank_column`].
pub fn line_at(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let bytes = source.as_bytes();
    let start = memchr::memrchr(b'\n', &bytes[..offset]).map_or(0, |idx| idx + 1);
    let end = memchr::memchr(b'\n', &bytes[offset..]).map_or(source.len(), |idx| offset + idx);
    &source[start..end]
}

/// Offset of the first character in `line` that is neither a space nor a tab.
///
/// Returns 0 for lines without indentation. A line made only of blanks
/// reports its full length.
pub fn first_non_blank_column(line: &str) -> usize {
    line.bytes()
        .position(|b| b != b' ' && b != b'\t')
        .unwrap_or(line.len())
}
