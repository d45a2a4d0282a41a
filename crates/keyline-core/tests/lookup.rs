//! End-to-end lookups against files on disk.

use keyline_core::{Error, LookupOptions, get_yaml_line_number, get_yaml_location};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const LOCALE: &str = "\
# English translations
en:
  invoice:
    labels:
      add_new: Add new
      delete: Delete

  users:
    title: Users
";

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn test_exact_match_line() {
    let file = yaml_file(LOCALE);
    let location = get_yaml_line_number(file.path(), "en.invoice.labels.delete")
        .unwrap()
        .unwrap();
    assert_eq!(location.line, 6);
    assert_eq!(location.column, None);
}

#[test]
fn test_path_is_absolute_and_canonical() {
    let file = yaml_file(LOCALE);
    let location = get_yaml_line_number(file.path(), "en").unwrap().unwrap();
    assert!(location.path.is_absolute());
    assert_eq!(location.path, fs::canonicalize(file.path()).unwrap());
    assert_eq!(location.line, 2);
}

#[test]
fn test_relative_path_is_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("config");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("en.yml"), LOCALE).unwrap();

    let indirect = dir.path().join("config/../config/en.yml");
    let location = get_yaml_line_number(&indirect, "en.users.title")
        .unwrap()
        .unwrap();
    assert_eq!(location.path, fs::canonicalize(nested.join("en.yml")).unwrap());
    assert_eq!(location.line, 9);
}

#[test]
fn test_fallback_to_nearest_key() {
    let file = yaml_file(LOCALE);
    let location = get_yaml_line_number(file.path(), "en.invoice.labels.add_new.tooltip")
        .unwrap()
        .unwrap();
    assert_eq!(location.line, 5);

    let location = get_yaml_line_number(file.path(), "en.users.missing")
        .unwrap()
        .unwrap();
    assert_eq!(location.line, 8);
}

#[test]
fn test_not_found_is_none() {
    let file = yaml_file(LOCALE);
    assert_eq!(get_yaml_line_number(file.path(), "fr.invoice").unwrap(), None);
}

#[test]
fn test_empty_file_is_none() {
    let file = yaml_file("");
    assert_eq!(get_yaml_line_number(file.path(), "a").unwrap(), None);
}

#[test]
fn test_scalar_root_is_none() {
    let file = yaml_file("just text\n");
    assert_eq!(get_yaml_line_number(file.path(), "just").unwrap(), None);
}

#[test]
fn test_only_string_keys_match() {
    let file = yaml_file("errors:\n  404: plain\n  \"404\": quoted\n");
    let location = get_yaml_line_number(file.path(), "errors.404").unwrap().unwrap();
    assert_eq!(location.line, 3);

    let file = yaml_file("errors:\n  404: plain\n");
    let location = get_yaml_line_number(file.path(), "errors.404").unwrap().unwrap();
    // The integer key is skipped, so only `errors` is found
    assert_eq!(location.line, 1);
}

#[test]
fn test_column_option() {
    let file = yaml_file(LOCALE);
    let location = get_yaml_location(
        file.path(),
        "en.invoice.labels.add_new",
        &LookupOptions::with_column(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(location.line, 5);
    assert_eq!(location.column, Some(6));

    let location = get_yaml_location(file.path(), "en", &LookupOptions::with_column())
        .unwrap()
        .unwrap();
    assert_eq!(location.column, Some(0));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = get_yaml_line_number(dir.path().join("absent.yml"), "a").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let file = yaml_file("en:\n  title: [unterminated\n");
    let err = get_yaml_line_number(file.path(), "en.title").unwrap_err();
    match err {
        Error::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_lookups_are_repeatable_and_leave_file_untouched() {
    let file = yaml_file(LOCALE);
    let first = get_yaml_line_number(file.path(), "en.invoice.labels").unwrap();
    let second = get_yaml_line_number(file.path(), "en.invoice.labels").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(file.path()).unwrap(), LOCALE);
}
