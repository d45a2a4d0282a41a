//! File-level lookups: read, parse, resolve, convert.

use crate::{Error, KeyPath, Location, LookupOptions, Resolution, Result, resolve, to_location};
use std::fs;
use std::path::Path;

/// Resolve `key_path` in YAML `content` held in memory.
///
/// Returns `Ok(None)` for an empty document or when the first segment does
/// not match at the root.
pub fn find_key(content: &str, key_path: &KeyPath) -> keyline_yaml::Result<Option<Resolution>> {
    let Some(root) = keyline_yaml::parse(content)? else {
        tracing::debug!("document is empty");
        return Ok(None);
    };
    Ok(resolve(&root, key_path))
}

/// Find the line declaring `key_path` in the YAML file at `file_path`.
///
/// # Example
///
/// ```rust,no_run
/// use keyline_core::get_yaml_line_number;
///
/// if let Some(location) = get_yaml_line_number("config.yaml", "server.database.user")? {
///     println!("{}:{}", location.path.display(), location.line);
/// }
/// # Ok::<(), keyline_core::Error>(())
/// ```
///
/// # Errors
///
/// Fails when the key path is malformed, the file cannot be read, or the file
/// is not valid YAML. A key that is not present is `Ok(None)`.
pub fn get_yaml_line_number(
    file_path: impl AsRef<Path>,
    key_path: &str,
) -> Result<Option<Location>> {
    get_yaml_location(file_path, key_path, &LookupOptions::default())
}

/// Like [`get_yaml_line_number`], with [`LookupOptions`] controlling whether a
/// column is reported.
pub fn get_yaml_location(
    file_path: impl AsRef<Path>,
    key_path: &str,
    options: &LookupOptions,
) -> Result<Option<Location>> {
    let file_path = file_path.as_ref();
    let key_path: KeyPath = key_path.parse()?;
    tracing::debug!(path = %file_path.display(), key = %key_path, "looking up key");

    let content = fs::read_to_string(file_path).map_err(|e| Error::io(file_path, e))?;
    let resolution = find_key(&content, &key_path).map_err(|e| Error::parse(file_path, e))?;

    let Some(resolution) = resolution else {
        tracing::debug!(key = %key_path, "key not found");
        return Ok(None);
    };
    if !resolution.is_exact() {
        tracing::debug!(key = %key_path, "only a prefix matched, using nearest key");
    }

    let absolute = fs::canonicalize(file_path).map_err(|e| Error::io(file_path, e))?;
    Ok(Some(to_location(&content, resolution.range(), absolute, options)))
}
