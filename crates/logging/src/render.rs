//! crates/logging/src/render.rs
//! Line rendering for tagged console messages.
//!
//! The output format is part of the crate's contract:
//!
//! - plain: `[<LABEL>]: <message>\n`
//! - located: `[<LABEL>] <file>:<line>: <message>\n`
//!
//! When colors are enabled the color escape precedes the label and the reset
//! escape follows it, both inside the brackets.

use std::fmt;
use std::io::{self, Write};

use crate::location::SourceLocation;
use crate::severity::{RESET_COLOR, Severity, level_color, level_label};

/// Renders a plain log line to `writer`.
///
/// # Examples
///
/// ```
/// use logging::{Severity, render_plain};
///
/// let mut out = Vec::new();
/// render_plain(&mut out, Severity::Info, false, format_args!("ready"))?;
/// assert_eq!(out, b"[INFO]: ready\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_plain<W: Write>(
    writer: &mut W,
    severity: Severity,
    colors: bool,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    let raw = severity as u8;
    if colors {
        writeln!(
            writer,
            "[{}{}{}]: {}",
            level_color(raw),
            level_label(raw),
            RESET_COLOR,
            args
        )
    } else {
        writeln!(writer, "[{}]: {}", level_label(raw), args)
    }
}

/// Renders a located log line to `writer`.
///
/// The location renders as `basename:line` between the level tag and the
/// message body.
///
/// # Examples
///
/// ```
/// use logging::{Severity, SourceLocation, render_located};
///
/// let mut out = Vec::new();
/// let location = SourceLocation::new("/src/net/socket.rs", 88);
/// render_located(&mut out, Severity::Error, false, &location, format_args!("bind failed"))?;
/// assert_eq!(out, b"[ERROR] socket.rs:88: bind failed\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_located<W: Write>(
    writer: &mut W,
    severity: Severity,
    colors: bool,
    location: &SourceLocation,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    let raw = severity as u8;
    if colors {
        writeln!(
            writer,
            "[{}{}{}] {}:{}: {}",
            level_color(raw),
            level_label(raw),
            RESET_COLOR,
            location.file_name(),
            location.line(),
            args
        )
    } else {
        writeln!(
            writer,
            "[{}] {}:{}: {}",
            level_label(raw),
            location.file_name(),
            location.line(),
            args
        )
    }
}
