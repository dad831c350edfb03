//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the console logger.
//!
//! This module provides a tracing-subscriber layer that renders tracing
//! events through the console facade, so code instrumented with the standard
//! tracing macros shares the same threshold, level tags, and color handling
//! as direct `log_*!` calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LogConfig, init_tracing};
//!
//! init_tracing(&LogConfig::default());
//!
//! tracing::info!("connected");
//! tracing::warn!("slow response: {}ms", elapsed);
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LogConfig;
use crate::console;
use crate::severity::Severity;

/// A tracing layer that forwards events to the console logger.
///
/// Event levels map onto the console severities; TRACE has no counterpart
/// and shares the DEBUG tag. Threshold filtering happens in the facade, so
/// changing the process-wide threshold affects bridged events immediately.
pub struct ConsoleLayer;

impl ConsoleLayer {
    /// Map a tracing level to a console severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());
        if !console::level_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            console::log(severity, format_args!("{message}"));
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Initialize tracing output through the console logger.
///
/// Applies `config` to the console facade and installs [`ConsoleLayer`] as
/// the global subscriber. Call once at startup; the tracing registry rejects
/// a second global subscriber.
pub fn init_tracing(config: &LogConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    console::init(config);

    tracing_subscriber::registry().with(ConsoleLayer).init();
}
