//! crates/logging/src/macros.rs
//! Leveled logging macros over the console facade.
//!
//! The plain macros (`log_debug!`, `log_info!`, `log_warning!`) render a
//! bracketed level tag followed by the message. The located macros
//! (`log_error!`, `log_critical!`) additionally capture `file!()` and
//! `line!()` at the call site so high-severity output points back at its
//! origin.
//!
//! Every macro checks [`crate::console::level_enabled`] before anything
//! else, so a suppressed level never evaluates its format arguments. In a
//! build with the `off` feature the check is a constant `false` and the
//! whole expansion compiles away.

/// Logs a message at the DEBUG level.
///
/// # Examples
///
/// ```
/// use logging::log_debug;
///
/// log_debug!("cache warmed in {}ms", 12);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::console::level_enabled($crate::Severity::Debug) {
            $crate::console::log($crate::Severity::Debug, format_args!($($arg)*));
        }
    };
}

/// Logs a message at the INFO level.
///
/// # Examples
///
/// ```
/// use logging::log_info;
///
/// log_info!("listening on port {}", 8730);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if $crate::console::level_enabled($crate::Severity::Info) {
            $crate::console::log($crate::Severity::Info, format_args!($($arg)*));
        }
    };
}

/// Logs a message at the WARNING level.
///
/// # Examples
///
/// ```
/// use logging::log_warning;
///
/// log_warning!("retrying after transient failure");
/// ```
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        if $crate::console::level_enabled($crate::Severity::Warning) {
            $crate::console::log($crate::Severity::Warning, format_args!($($arg)*));
        }
    };
}

/// Logs a message at the ERROR level with the originating file and line.
///
/// # Examples
///
/// ```
/// use logging::log_error;
///
/// log_error!("connection lost: {}", "reset by peer");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if $crate::console::level_enabled($crate::Severity::Error) {
            $crate::console::log_with_location(
                $crate::Severity::Error,
                file!(),
                line!(),
                format_args!($($arg)*),
            );
        }
    };
}

/// Logs a message at the CRITICAL level with the originating file and line.
///
/// # Examples
///
/// ```
/// use logging::log_critical;
///
/// log_critical!("state table corrupted");
/// ```
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => {
        if $crate::console::level_enabled($crate::Severity::Critical) {
            $crate::console::log_with_location(
                $crate::Severity::Critical,
                file!(),
                line!(),
                format_args!($($arg)*),
            );
        }
    };
}
