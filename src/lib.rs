//! dotls - list the hidden entries of a directory

pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod output;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::{ColorMode, Settings, YearStyle};
pub use error::{ConfigError, ListError, SkippedEntry};
pub use listing::{
    Collection, Collector, Entry, EntrySink, ListOrder, ListingReport, OrderedEntries, list_hidden,
};
pub use output::{EntryFormatter, OutputConfig};
