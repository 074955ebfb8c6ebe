//! Listing output
//!
//! - `config` - Output configuration resolved from settings
//! - `formatter` - Column-aligned line formatting

mod config;
mod formatter;

pub use config::OutputConfig;
pub use formatter::EntryFormatter;
