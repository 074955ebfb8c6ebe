//! Directory entries and the modification-time ordering

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// A hidden directory entry with the metadata shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    /// Full path the metadata was read from.
    pub path: PathBuf,
    pub size: u64,
    /// Modification time, truncated to whole seconds.
    pub modified: DateTime<Utc>,
    pub is_dir: bool,
}

impl Entry {
    pub fn new(
        name: impl Into<OsString>,
        path: impl Into<PathBuf>,
        size: u64,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
            modified: truncate_to_seconds(modified),
            is_dir: false,
        }
    }

    /// Build an entry from metadata already looked up for `path`.
    pub fn from_metadata(
        name: impl Into<OsString>,
        path: impl Into<PathBuf>,
        metadata: &Metadata,
    ) -> io::Result<Self> {
        let modified: DateTime<Utc> = metadata.modified()?.into();
        let mut entry = Self::new(name, path, metadata.len(), modified);
        entry.is_dir = metadata.is_dir();
        Ok(entry)
    }

    /// Byte length of the name, used for column alignment.
    pub fn name_len(&self) -> usize {
        self.name.len()
    }
}

/// Order entries by modification time, then by name bytes.
///
/// Names within one directory are unique, so this is a total order over the
/// entries of a listing.
pub fn modified_order(a: &Entry, b: &Entry) -> Ordering {
    a.modified
        .cmp(&b.modified)
        .then_with(|| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()))
}

/// Check whether a name is a hidden entry (`.` and `..` excluded).
pub fn is_hidden(name: &OsStr) -> bool {
    match name.as_encoded_bytes() {
        [b'.'] | [b'.', b'.'] => false,
        [b'.', ..] => true,
        _ => false,
    }
}

fn truncate_to_seconds(time: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(time.timestamp(), 0).unwrap_or(time)
}
