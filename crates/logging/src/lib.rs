#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides a minimal severity-filtered console logger: messages
//! carry one of five ordered severities, a mutable threshold decides which
//! of them render, and each emitted line is tagged with a bracketed,
//! optionally colorized level label. The two highest severities additionally
//! record the originating file and line.
//!
//! # Design
//!
//! The crate has two tiers. [`Logger`] is an owned engine around any
//! [`io::Write`](std::io::Write) implementor, carrying its own
//! [`LogConfig`]; it is what library code embeds and what tests drive. The
//! [`console`] module is the process-wide facade over stdout that the
//! `log_*!` macros target, with its threshold in an atomic cell so any
//! thread may adjust it.
//!
//! # Invariants
//!
//! - Filtering is a strict less-than: a message at exactly the threshold is
//!   emitted.
//! - Every threshold comparison reads the live value at call time; nothing
//!   is snapshotted.
//! - When colors are disabled no escape sequence is emitted for any
//!   severity.
//!
//! # Errors
//!
//! [`Logger`] surfaces [`std::io::Error`] values from the underlying writer.
//! The [`console`] facade is infallible by design; see its module
//! documentation.
//!
//! # Examples
//!
//! Drive an owned logger over an in-memory buffer:
//!
//! ```
//! use logging::{LogConfig, Logger, Severity};
//!
//! let mut logger = Logger::new(Vec::new());
//! logger.log(Severity::Debug, format_args!("suppressed"))?;
//! logger.log(Severity::Warning, format_args!("disk almost full"))?;
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(output, "[WARNING]: disk almost full\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Log through the process-wide facade:
//!
//! ```
//! use logging::{console, Severity, log_info, log_error};
//!
//! console::set_threshold(Severity::Info);
//! log_info!("starting up");
//! log_error!("bind failed on port {}", 8730);
//! ```

use std::fmt;
use std::io::{self, Write};

pub mod console;

mod config;
mod location;
mod macros;
mod render;
mod severity;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ColorMode, FlushPolicy, LogConfig, ParseColorModeError};
pub use location::{SourceLocation, file_basename};
pub use render::{render_located, render_plain};
pub use severity::{ParseSeverityError, RESET_COLOR, Severity, level_color, level_label};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing};

/// Owned severity-filtered logger over an [`io::Write`] implementor.
///
/// The logger holds a [`LogConfig`] and applies its threshold on every call.
/// [`ColorMode::Auto`] resolves to no color here, since an arbitrary writer
/// is not a terminal; the [`console`] facade is where `Auto` means terminal
/// detection.
///
/// # Examples
///
/// Collect filtered diagnostics into a [`Vec<u8>`]:
///
/// ```
/// use logging::{LogConfig, Logger, Severity};
///
/// let config = LogConfig::default().with_threshold(Severity::Error);
/// let mut logger = Logger::with_config(Vec::new(), config);
///
/// logger.log(Severity::Warning, format_args!("dropped"))?;
/// logger.log(Severity::Error, format_args!("kept"))?;
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "[ERROR]: kept\n");
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Attach a source location to high-severity output:
///
/// ```
/// use logging::{Logger, Severity, SourceLocation};
///
/// let mut logger = Logger::new(Vec::new());
/// let location = SourceLocation::new("/src/transfer/pipeline.rs", 210);
/// logger.log_with_location(Severity::Critical, &location, format_args!("checksum mismatch"))?;
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "[CRITICAL] pipeline.rs:210: checksum mismatch\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Logger<W> {
    writer: W,
    config: LogConfig,
}

impl<W> Logger<W> {
    /// Creates a logger with the default configuration.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, LogConfig::default())
    }

    /// Creates a logger with the provided configuration.
    #[must_use]
    pub const fn with_config(writer: W, config: LogConfig) -> Self {
        Self { writer, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Returns the current severity threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.config.threshold
    }

    /// Overwrites the severity threshold for subsequent calls.
    pub fn set_threshold(&mut self, level: Severity) {
        self.config.threshold = level;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn colors(&self) -> bool {
        self.config.colors.enabled_for(false)
    }
}

impl<W> Default for Logger<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Renders one plain log line if `level` meets the threshold.
    ///
    /// A suppressed level is a silent no-op that still returns `Ok`.
    pub fn log(&mut self, level: Severity, args: fmt::Arguments<'_>) -> io::Result<()> {
        if level < self.config.threshold {
            return Ok(());
        }
        render_plain(&mut self.writer, level, self.colors(), args)?;
        if self.config.flush == FlushPolicy::PerLine {
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Renders one located log line if `level` meets the threshold.
    pub fn log_with_location(
        &mut self,
        level: Severity,
        location: &SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if level < self.config.threshold {
            return Ok(());
        }
        render_located(&mut self.writer, level, self.colors(), location, args)?;
        if self.config.flush == FlushPolicy::PerLine {
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
