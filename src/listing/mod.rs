//! Hidden-entry listing
//!
//! A listing runs in two steps. The [`Collector`] reads the hidden names of a
//! directory and looks up their metadata, pushing each entry into an
//! [`EntrySink`]. The sink decides the output order: a `Vec<Entry>` keeps
//! directory order, [`OrderedEntries`] keeps modification order. The entries
//! are then written by an [`EntryFormatter`].

mod collector;
mod entry;
mod ordered;
mod sink;

use std::fmt::Display;
use std::path::Path;

use chrono::TimeZone;
use termcolor::WriteColor;
use tracing::debug;

use crate::error::{Result, SkippedEntry};
use crate::output::{EntryFormatter, OutputConfig};

pub use collector::{Collection, Collector};
pub use entry::{Entry, is_hidden, modified_order};
pub use ordered::{InOrder, OrderedEntries};
pub use sink::EntrySink;

/// Order in which entries are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// As the directory yields them.
    #[default]
    Directory,
    /// Ascending modification time, ties by name.
    Modified,
}

/// Summary of a completed listing.
#[derive(Debug)]
pub struct ListingReport {
    pub listed: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// List the hidden entries of `dir` to `out`.
///
/// Directory open and enter failures, and write failures, abort the
/// listing. Entries whose metadata cannot be read are left out and returned
/// in [`ListingReport::skipped`].
pub fn list_hidden<W, Tz>(
    dir: &Path,
    order: ListOrder,
    config: OutputConfig,
    tz: Tz,
    out: &mut W,
) -> Result<ListingReport>
where
    W: WriteColor,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let collector = Collector::open(dir)?;
    debug!(?order, "listing hidden entries");

    let report = match order {
        ListOrder::Directory => {
            let mut entries: Vec<Entry> = Vec::with_capacity(collector.names().len());
            let collection = collector.collect_into(&mut entries);
            let formatter = EntryFormatter::with_timezone(collection.name_width, config, tz);
            formatter.write_all(out, &entries)?;
            ListingReport {
                listed: entries.len(),
                skipped: collection.skipped,
            }
        }
        ListOrder::Modified => {
            let mut tree = OrderedEntries::with_capacity(collector.names().len());
            let collection = collector.collect_into(&mut tree);
            let formatter = EntryFormatter::with_timezone(collection.name_width, config, tz);
            formatter.write_all(out, &tree)?;
            ListingReport {
                listed: tree.len(),
                skipped: collection.skipped,
            }
        }
    };

    Ok(report)
}
