//! Error types for listing and configuration

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

/// Fatal errors that abort a listing.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot open directory '{}': {source}", .path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot enter directory '{}': {source}", .path.display())]
    EnterDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// A hidden entry whose metadata could not be read.
///
/// The entry is left out of the listing and the rest of the directory is
/// still collected.
#[derive(Debug, Error)]
#[error("cannot access '{}': {source}", .name.to_string_lossy())]
pub struct SkippedEntry {
    pub name: OsString,
    #[source]
    pub source: io::Error,
}

/// Invalid settings read from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var} (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_entry_names_entry_and_reason() {
        let skipped = SkippedEntry {
            name: OsString::from(".broken"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = skipped.to_string();
        assert!(message.contains(".broken"), "message: {}", message);
        assert!(message.contains("No such file or directory"), "message: {}", message);
    }

    #[test]
    fn test_open_dir_error_names_path() {
        let err = ListError::OpenDir {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot open directory '/nope': missing");
    }
}
