//! Settings read from the environment
//!
//! The command line only carries the directory and `-s`, so presentation
//! choices come from environment variables:
//!
//! - `DOTLS_YEAR`: `full` (default) or `short` for two-digit years
//! - `DOTLS_COLOR`: `auto` (default), `always` or `never`

use std::io::IsTerminal;

use crate::error::ConfigError;

pub const YEAR_VAR: &str = "DOTLS_YEAR";
pub const COLOR_VAR: &str = "DOTLS_COLOR";

/// How the year is written in the date column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearStyle {
    /// `MM/DD/YYYY`
    #[default]
    Full,
    /// `MM/DD/YY`, the year modulo 100. Kept for output compatible with the
    /// classic two-digit listing.
    Short,
}

impl YearStyle {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" | "4" => Ok(YearStyle::Full),
            "short" | "2" => Ok(YearStyle::Short),
            _ => Err(ConfigError::InvalidValue {
                var: YEAR_VAR,
                value: value.to_string(),
                expected: "full, short",
            }),
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ConfigError::InvalidValue {
                var: COLOR_VAR,
                value: value.to_string(),
                expected: "auto, always, never",
            }),
        }
    }

    /// Resolve to a yes/no answer for stdout.
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org/
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                if std::env::var_os("FORCE_COLOR").is_some() {
                    return true;
                }
                if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                    return false;
                }
                std::io::stdout().is_terminal()
            }
        }
    }
}

/// Presentation settings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub year: YearStyle,
    pub color: ColorMode,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable lookup. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let year = match set(YEAR_VAR) {
            Some(v) => YearStyle::parse(&v)?,
            None => YearStyle::default(),
        };
        let color = match set(COLOR_VAR) {
            Some(v) => ColorMode::parse(&v)?,
            None => ColorMode::default(),
        };

        Ok(Self { year, color })
    }
}
