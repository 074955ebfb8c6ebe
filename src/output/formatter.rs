//! Column-aligned entry lines
//!
//! Each entry becomes one line:
//!
//! ```text
//! .bashrc         220 03/14/2024  9:05
//! .profile        807 03/15/2024 17:42
//! ```
//!
//! The name is left-aligned to the widest hidden name, the size is
//! right-aligned in ten columns, and the time uses a 24-hour clock with a
//! space-padded hour.

use std::borrow::Cow;
use std::fmt::Display;
use std::io;

use chrono::TimeZone;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::listing::Entry;

use super::config::OutputConfig;

const SIZE_WIDTH: usize = 10;

/// Formats entries against a fixed name width and time zone.
#[derive(Debug, Clone)]
pub struct EntryFormatter<Tz: TimeZone> {
    name_width: usize,
    config: OutputConfig,
    tz: Tz,
}

impl<Tz> EntryFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_timezone(name_width: usize, config: OutputConfig, tz: Tz) -> Self {
        Self {
            name_width,
            config,
            tz,
        }
    }

    /// Everything after the name column: size, date and time.
    fn columns(&self, entry: &Entry) -> String {
        let modified = entry.modified.with_timezone(&self.tz);
        format!(
            " {:>width$} {}",
            entry.size,
            modified.format(self.config.date_format()),
            width = SIZE_WIDTH
        )
    }

    fn padding(&self, written_len: usize) -> String {
        " ".repeat(self.name_width.saturating_sub(written_len))
    }

    /// Render one line without color or trailing newline.
    ///
    /// Names that are not valid UTF-8 are rendered lossily; use
    /// [`write_entry`](Self::write_entry) for the exact bytes.
    pub fn format_line(&self, entry: &Entry) -> String {
        let name = entry.name.to_string_lossy();
        format!("{}{}{}", name, self.padding(name.len()), self.columns(entry))
    }

    /// Write one line, coloring directory names.
    pub fn write_entry<W: WriteColor>(&self, out: &mut W, entry: &Entry) -> io::Result<()> {
        let name = name_bytes(entry);
        if entry.is_dir {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        out.write_all(&name)?;
        if entry.is_dir {
            out.reset()?;
        }
        writeln!(out, "{}{}", self.padding(name.len()), self.columns(entry))
    }

    /// Write a line for every entry, in the order given.
    pub fn write_all<'a, W, I>(&self, out: &mut W, entries: I) -> io::Result<()>
    where
        W: WriteColor,
        I: IntoIterator<Item = &'a Entry>,
    {
        for entry in entries {
            self.write_entry(out, entry)?;
        }
        out.flush()
    }
}

/// The name exactly as the filesystem returned it.
#[cfg(unix)]
fn name_bytes(entry: &Entry) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(entry.name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(entry: &Entry) -> Cow<'_, [u8]> {
    match entry.name.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
