//! crates/logging/src/console.rs
//! Process-wide console logger backing the log macros.
//!
//! The facade keeps the severity threshold in an atomic cell so it can be
//! read and rewritten from any thread without locking, and resolves the
//! color and flush switches once at [`init`]. Rendering goes through a held
//! stdout lock, so concurrent callers cannot interleave within a line.
//!
//! Unlike [`crate::Logger`], the facade is infallible: a console write that
//! fails has nowhere useful to report to, so the error is dropped rather
//! than allowed to take the process down.
//!
//! With the `off` feature enabled every function in this module reduces to a
//! no-op (or a constant), and the filter check the macros perform compiles
//! to `false`, eliding the call entirely.

use std::fmt;

#[cfg(not(feature = "off"))]
use std::io::{self, Write};
#[cfg(not(feature = "off"))]
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(not(feature = "off"))]
use is_terminal::IsTerminal;

use crate::config::LogConfig;
#[cfg(not(feature = "off"))]
use crate::config::ColorMode;
#[cfg(not(feature = "off"))]
use crate::location::SourceLocation;
#[cfg(not(feature = "off"))]
use crate::render::{render_located, render_plain};
use crate::severity::Severity;

#[cfg(not(feature = "off"))]
static THRESHOLD: AtomicU8 = AtomicU8::new(Severity::Info as u8);

// Color state: Auto defers terminal detection until the first rendered line,
// then caches the answer.
#[cfg(not(feature = "off"))]
const COLORS_AUTO: u8 = 0;
#[cfg(not(feature = "off"))]
const COLORS_ON: u8 = 1;
#[cfg(not(feature = "off"))]
const COLORS_OFF: u8 = 2;

#[cfg(not(feature = "off"))]
static COLORS: AtomicU8 = AtomicU8::new(COLORS_AUTO);
#[cfg(not(feature = "off"))]
static FLUSH: AtomicBool = AtomicBool::new(false);

/// Applies `config` to the process-wide console logger.
///
/// Callers normally invoke this once at startup; calling it again simply
/// overwrites the threshold and switches.
#[cfg(not(feature = "off"))]
pub fn init(config: &LogConfig) {
    THRESHOLD.store(config.threshold as u8, Ordering::Release);
    let colors = match config.colors {
        ColorMode::Auto => COLORS_AUTO,
        ColorMode::Always => COLORS_ON,
        ColorMode::Never => COLORS_OFF,
    };
    COLORS.store(colors, Ordering::Release);
    FLUSH.store(config.flush.per_line(), Ordering::Release);
}

/// Overwrites the process-wide severity threshold.
#[cfg(not(feature = "off"))]
pub fn set_threshold(level: Severity) {
    THRESHOLD.store(level as u8, Ordering::Release);
}

/// Returns the current process-wide severity threshold.
#[cfg(not(feature = "off"))]
#[must_use]
pub fn get_threshold() -> Severity {
    Severity::from_u8(THRESHOLD.load(Ordering::Relaxed)).unwrap_or(Severity::Info)
}

/// Checks whether a message at `level` would currently be emitted.
///
/// The macros call this before evaluating their format arguments so
/// suppressed levels never format anything.
#[cfg(not(feature = "off"))]
#[inline]
#[must_use]
pub fn level_enabled(level: Severity) -> bool {
    (level as u8) >= THRESHOLD.load(Ordering::Relaxed)
}

#[cfg(not(feature = "off"))]
fn colors_enabled() -> bool {
    match COLORS.load(Ordering::Relaxed) {
        COLORS_ON => true,
        COLORS_OFF => false,
        _ => {
            let enabled = io::stdout().is_terminal();
            COLORS.store(
                if enabled { COLORS_ON } else { COLORS_OFF },
                Ordering::Relaxed,
            );
            enabled
        }
    }
}

#[cfg(not(feature = "off"))]
fn flush_per_line() -> bool {
    FLUSH.load(Ordering::Relaxed)
}

/// Renders a plain log line to stdout if `level` meets the threshold.
#[cfg(not(feature = "off"))]
pub fn log(level: Severity, args: fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let colors = colors_enabled();
    let mut out = io::stdout().lock();
    let _ = render_plain(&mut out, level, colors, args);
    if flush_per_line() {
        let _ = out.flush();
    }
}

/// Renders a located log line to stdout if `level` meets the threshold.
///
/// `file` and `line` come from `file!()` and `line!()` at the call site; the
/// rendered prefix shows only the basename of `file`.
#[cfg(not(feature = "off"))]
pub fn log_with_location(level: Severity, file: &'static str, line: u32, args: fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let location = SourceLocation::new(file, line);
    let colors = colors_enabled();
    let mut out = io::stdout().lock();
    let _ = render_located(&mut out, level, colors, &location, args);
    if flush_per_line() {
        let _ = out.flush();
    }
}

// ============================================================================
// Disabled build (`off` feature): the entire facade compiles to nothing.
// ============================================================================

/// Applies `config` to the process-wide console logger (disabled build).
#[cfg(feature = "off")]
pub fn init(_config: &LogConfig) {}

/// Overwrites the process-wide severity threshold (disabled build).
#[cfg(feature = "off")]
pub fn set_threshold(_level: Severity) {}

/// Returns the default threshold (disabled build).
#[cfg(feature = "off")]
#[must_use]
pub fn get_threshold() -> Severity {
    Severity::Info
}

/// Always `false` in a disabled build, so macro bodies compile away.
#[cfg(feature = "off")]
#[inline]
#[must_use]
pub const fn level_enabled(_level: Severity) -> bool {
    false
}

/// No-op in a disabled build.
#[cfg(feature = "off")]
pub fn log(_level: Severity, _args: fmt::Arguments<'_>) {}

/// No-op in a disabled build.
#[cfg(feature = "off")]
pub fn log_with_location(
    _level: Severity,
    _file: &'static str,
    _line: u32,
    _args: fmt::Arguments<'_>,
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    // The threshold cell is process-wide, so everything that mutates it
    // lives in a single test to keep the harness race-free.
    #[cfg(not(feature = "off"))]
    #[test]
    fn threshold_round_trips_and_gates_levels() {
        assert_eq!(get_threshold(), Severity::Info);
        assert!(level_enabled(Severity::Info));
        assert!(level_enabled(Severity::Critical));
        assert!(!level_enabled(Severity::Debug));

        set_threshold(Severity::Error);
        assert_eq!(get_threshold(), Severity::Error);
        assert!(!level_enabled(Severity::Warning));
        assert!(level_enabled(Severity::Error));

        set_threshold(Severity::Info);
        assert_eq!(get_threshold(), Severity::Info);
    }

    #[cfg(feature = "off")]
    #[test]
    fn disabled_build_reduces_to_constants() {
        set_threshold(Severity::Debug);
        assert_eq!(get_threshold(), Severity::Info);
        assert!(!level_enabled(Severity::Critical));
    }
}
