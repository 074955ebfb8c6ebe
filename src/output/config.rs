//! Output configuration types

use crate::config::{Settings, YearStyle};

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
    pub year: YearStyle,
}

impl OutputConfig {
    /// Resolve environment settings against the current stdout.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            use_color: settings.color.use_color(),
            year: settings.year,
        }
    }

    pub(crate) fn date_format(&self) -> &'static str {
        match self.year {
            YearStyle::Full => "%m/%d/%Y %k:%M",
            YearStyle::Short => "%m/%d/%y %k:%M",
        }
    }
}
