//! crates/logging/src/config.rs
//! Configuration surface for the console logger.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::severity::Severity;

/// Controls whether color escape sequences are emitted around level tags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Colorize when the output stream is a terminal.
    #[default]
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

impl ColorMode {
    /// Resolves the mode against the terminal status of the output stream.
    #[must_use]
    pub const fn enabled_for(self, stream_is_terminal: bool) -> bool {
        match self {
            Self::Auto => stream_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Error returned when parsing a color mode name fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorModeError {
    input: String,
}

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized color mode {:?} (expected auto, always, or never)",
            self.input
        )
    }
}

impl Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name = text.trim();
        if name.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if name.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if name.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else {
            Err(ParseColorModeError {
                input: text.to_owned(),
            })
        }
    }
}

/// Controls whether the stream is flushed after every rendered line.
///
/// `PerLine` guarantees each message is visible before the call returns,
/// which matters when output must survive an imminent crash.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FlushPolicy {
    /// Leave flushing to the stream's own buffering.
    #[default]
    Deferred,
    /// Issue an explicit flush after every line.
    PerLine,
}

impl FlushPolicy {
    pub(crate) const fn per_line(self) -> bool {
        matches!(self, Self::PerLine)
    }
}

/// Owned configuration for a console logger.
///
/// Constructed once at process start and handed to [`crate::console::init`]
/// or a [`crate::Logger`]. The default threshold is [`Severity::Info`].
///
/// # Examples
///
/// ```
/// use logging::{ColorMode, FlushPolicy, LogConfig, Severity};
///
/// let config = LogConfig::default()
///     .with_threshold(Severity::Debug)
///     .with_colors(ColorMode::Never)
///     .with_flush(FlushPolicy::PerLine);
///
/// assert_eq!(config.threshold, Severity::Debug);
/// assert!(!config.colors.enabled_for(true));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Minimum severity that will be emitted.
    pub threshold: Severity,
    /// Color escape handling for level tags.
    pub colors: ColorMode,
    /// Flush behavior after each rendered line.
    pub flush: FlushPolicy,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            colors: ColorMode::default(),
            flush: FlushPolicy::default(),
        }
    }
}

impl LogConfig {
    /// Replaces the severity threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the color mode.
    #[must_use]
    pub const fn with_colors(mut self, colors: ColorMode) -> Self {
        self.colors = colors;
        self
    }

    /// Replaces the flush policy.
    #[must_use]
    pub const fn with_flush(mut self, flush: FlushPolicy) -> Self {
        self.flush = flush;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_info() {
        let config = LogConfig::default();
        assert_eq!(config.threshold, Severity::Info);
        assert_eq!(config.colors, ColorMode::Auto);
        assert_eq!(config.flush, FlushPolicy::Deferred);
    }

    #[test]
    fn builders_replace_fields() {
        let config = LogConfig::default()
            .with_threshold(Severity::Critical)
            .with_colors(ColorMode::Always)
            .with_flush(FlushPolicy::PerLine);
        assert_eq!(config.threshold, Severity::Critical);
        assert_eq!(config.colors, ColorMode::Always);
        assert!(config.flush.per_line());
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.enabled_for(true));
        assert!(!ColorMode::Auto.enabled_for(false));
        assert!(ColorMode::Always.enabled_for(false));
        assert!(!ColorMode::Never.enabled_for(true));
    }

    #[test]
    fn color_mode_parses_case_insensitively() {
        assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert_eq!("Always".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("NEVER".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = LogConfig::default()
            .with_threshold(Severity::Warning)
            .with_colors(ColorMode::Never);
        let encoded = serde_json::to_string(&config).expect("serialize");
        let decoded: LogConfig = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, config);
    }
}
