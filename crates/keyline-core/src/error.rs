use std::path::PathBuf;
use thiserror::Error;

/// Hard failures of a key lookup.
///
/// A key that simply is not in the document is not an error; lookups report
/// that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read or its path could not be resolved
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML
    #[error("failed to parse YAML file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: keyline_yaml::Error,
    },

    /// The key path cannot address any key
    #[error("invalid key path '{key_path}': {reason}")]
    InvalidKeyPath { key_path: String, reason: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: keyline_yaml::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_key_path(key_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKeyPath {
            key_path: key_path.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure is a missing file rather than an unreadable one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for keyline-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::io("config/en.yml", io_err);
        let msg = err.to_string();
        assert!(msg.contains("config/en.yml"));
        assert!(msg.contains("no such file"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_permission_error_is_not_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::io("secret.yml", io_err).is_not_found());
    }

    #[test]
    fn test_parse_error() {
        let err = Error::parse(
            "broken.yml",
            keyline_yaml::Error::Syntax {
                message: "did not find expected key".into(),
                line: 2,
                column: 1,
            },
        );
        let msg = err.to_string();
        assert!(msg.contains("broken.yml"));
        assert!(msg.contains("did not find expected key"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_key_path() {
        let err = Error::invalid_key_path("a..b", "empty segment");
        assert_eq!(err.to_string(), "invalid key path 'a..b': empty segment");
    }
}
