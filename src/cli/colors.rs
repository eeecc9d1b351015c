//! Semantic colors for roster output
//!
//! Color is applied only when the terminal supports it and the user has not
//! turned it off (`NO_COLOR`, `display.color = "never"`).
//!
//! ```rust,ignore
//! use crate::cli::colors::{ColorSupport, RosterStyles, styled};
//!
//! let support = ColorSupport::detect();
//! let text = styled("saved", RosterStyles::success, support);
//! ```

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};

use crate::config::ColorMode;

/// Whether output should carry ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    None,
    Basic,
}

impl ColorSupport {
    /// Detect color support from environment and terminal capabilities
    #[must_use]
    pub fn detect() -> Self {
        // https://no-color.org/
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::None;
        }
        if std::env::var_os("FORCE_COLOR").is_some() {
            return Self::Basic;
        }
        if !std::io::stdout().is_terminal() {
            return Self::None;
        }
        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::None;
        }
        Self::Basic
    }

    /// Resolve the configured mode against the terminal.
    #[must_use]
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Always => Self::Basic,
            ColorMode::Never => Self::None,
            ColorMode::Auto => Self::detect(),
        }
    }

    #[must_use]
    pub const fn has_color(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Pre-built styles for common use cases
pub struct RosterStyles;

impl RosterStyles {
    /// Style for success messages (green, bold)
    pub fn success(text: &str) -> ColoredString {
        text.green().bold()
    }

    /// Style for error messages (red, bold)
    pub fn error(text: &str) -> ColoredString {
        text.red().bold()
    }

    /// Style for warning messages (yellow)
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Style for student IDs
    pub fn record_id(text: &str) -> ColoredString {
        text.cyan()
    }
}

/// Apply a style only when color is supported.
pub fn styled<S, F>(text: S, style_fn: F, support: ColorSupport) -> String
where
    S: AsRef<str>,
    F: FnOnce(&str) -> ColoredString,
{
    if support.has_color() {
        style_fn(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}
