//! Destinations for collected entries

use super::entry::Entry;

/// Receives entries as the collector reads them.
///
/// A `Vec<Entry>` keeps directory order; `OrderedEntries` keeps
/// modification order.
pub trait EntrySink {
    fn push_entry(&mut self, entry: Entry);
}

impl EntrySink for Vec<Entry> {
    fn push_entry(&mut self, entry: Entry) {
        self.push(entry);
    }
}
