//! crates/logging/src/severity.rs
//! Ordered severity levels and their display metadata.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Reset escape emitted after a colorized level tag.
pub const RESET_COLOR: &str = "\x1b[0m";

/// Severity of a log message.
///
/// The ordering is total (`Debug < Info < Warning < Error < Critical`) and is
/// the sole basis for threshold filtering. Discriminants are stable so the
/// value can round-trip through the atomic threshold cell.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Detailed diagnostic output.
    Debug = 0,
    /// Normal operational messages.
    Info = 1,
    /// Conditions worth reviewing that do not prevent operation.
    Warning = 2,
    /// Error conditions.
    Error = 3,
    /// Critical conditions requiring immediate attention.
    Critical = 4,
}

impl Severity {
    /// Every severity in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Converts a raw discriminant back into a severity.
    ///
    /// Returns `None` for values outside the closed enumeration.
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            4 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Display label rendered inside the bracketed level tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// ANSI color escape for the level tag.
    #[must_use]
    pub const fn color_code(self) -> &'static str {
        match self {
            Self::Debug => "\x1b[36m",
            Self::Info => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Critical => "\x1b[35m",
        }
    }
}

/// Display label for a raw severity value.
///
/// Values outside the closed enumeration fall back to `"UNKNOWN"`. The
/// fallback is unreachable through the typed API; it exists so a corrupted
/// threshold cell can never panic the renderer.
#[must_use]
pub const fn level_label(raw: u8) -> &'static str {
    match Severity::from_u8(raw) {
        Some(severity) => severity.label(),
        None => "UNKNOWN",
    }
}

/// Color escape for a raw severity value; unknown values get no color.
#[must_use]
pub const fn level_color(raw: u8) -> &'static str {
    match Severity::from_u8(raw) {
        Some(severity) => severity.color_code(),
        None => "",
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a severity name fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized log level {:?} (expected debug, info, warning, error, or critical)",
            self.input
        )
    }
}

impl Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name = text.trim();
        for severity in Self::ALL {
            if name.eq_ignore_ascii_case(severity.label()) {
                return Ok(severity);
            }
        }
        Err(ParseSeverityError {
            input: text.to_owned(),
        })
    }
}
