//! Collect the hidden entries of one directory

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{ListError, Result, SkippedEntry};

use super::entry::{Entry, is_hidden};
use super::sink::EntrySink;

/// Hidden entry names of a directory, read in directory order.
///
/// The directory handle is closed before `open` returns; metadata is looked
/// up later through full paths, so the working directory is never changed.
#[derive(Debug)]
pub struct Collector {
    dir: PathBuf,
    names: Vec<OsString>,
    name_width: usize,
}

/// Outcome of collecting a directory into a sink.
#[derive(Debug)]
pub struct Collection {
    /// Byte length of the longest hidden name, including skipped entries.
    pub name_width: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl Collector {
    /// Read the hidden entry names of `dir`.
    ///
    /// Fails if the directory cannot be read or cannot be entered.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "opening directory");

        let read_dir = fs::read_dir(dir).map_err(|source| ListError::OpenDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // Resolving `dir/.` needs search permission on `dir`, the same
        // permission needed to look up entries by name.
        fs::metadata(dir.join(".")).map_err(|source| ListError::EnterDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        let mut name_width = 0;
        for record in read_dir {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable directory record");
                    continue;
                }
            };
            let name = record.file_name();
            if !is_hidden(&name) {
                continue;
            }
            name_width = name_width.max(name.len());
            names.push(name);
        }

        debug!(count = names.len(), name_width, "read hidden entry names");

        Ok(Self {
            dir: dir.to_path_buf(),
            names,
            name_width,
        })
    }

    /// Hidden names in directory order.
    pub fn names(&self) -> &[OsString] {
        &self.names
    }

    pub fn name_width(&self) -> usize {
        self.name_width
    }

    /// Look up metadata for each hidden name and hand the entries to `sink`.
    ///
    /// Entries whose metadata cannot be read are reported in
    /// [`Collection::skipped`]; the remaining entries are still collected.
    pub fn collect_into<S: EntrySink>(self, sink: &mut S) -> Collection {
        let mut skipped = Vec::new();

        for name in self.names {
            let path = self.dir.join(&name);
            match fs::metadata(&path).and_then(|m| Entry::from_metadata(name.clone(), &path, &m)) {
                Ok(entry) => {
                    trace!(name = %entry.name.to_string_lossy(), size = entry.size, "collected entry");
                    sink.push_entry(entry);
                }
                Err(source) => {
                    debug!(name = %name.to_string_lossy(), error = %source, "skipping entry");
                    skipped.push(SkippedEntry { name, source });
                }
            }
        }

        Collection {
            name_width: self.name_width,
            skipped,
        }
    }
}
