#![deny(unsafe_code)]

//! Demonstration driver for the leveled console logger.
//!
//! Emits one message at every severity through the console facade, and with
//! `--choose` runs the option prompt so a new threshold can be picked
//! interactively and fed back into the level-setter.

use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use logging::{
    ColorMode, FlushPolicy, LogConfig, Severity, console, log_critical, log_debug, log_error,
    log_info, log_warning,
};

fn cli() -> Command {
    Command::new("conlog")
        .about("Leveled console logging demonstration")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("info")
                .help("Initial severity threshold: debug, info, warning, error, or critical")
                .value_parser(clap::value_parser!(Severity)),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .default_value("auto")
                .help("Colorize level tags: auto, always, or never")
                .value_parser(clap::value_parser!(ColorMode)),
        )
        .arg(
            Arg::new("flush")
                .long("flush")
                .action(ArgAction::SetTrue)
                .help("Flush stdout after every log line"),
        )
        .arg(
            Arg::new("choose")
                .long("choose")
                .action(ArgAction::SetTrue)
                .help("Interactively select a new threshold, then log again"),
        )
}

/// Emits one message at every severity, mirroring a typical startup trace.
fn emit_samples() {
    log_info!("This is an info");
    log_debug!("Debug Var = {}", 55);
    log_warning!("Warning");
    log_error!("Major error");
    log_critical!("Critical");
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    let level = matches
        .get_one::<Severity>("log-level")
        .copied()
        .unwrap_or(Severity::Info);
    let colors = matches
        .get_one::<ColorMode>("color")
        .copied()
        .unwrap_or_default();
    let flush = if matches.get_flag("flush") {
        FlushPolicy::PerLine
    } else {
        FlushPolicy::Deferred
    };

    console::init(
        &LogConfig::default()
            .with_threshold(level)
            .with_colors(colors)
            .with_flush(flush),
    );

    emit_samples();

    if matches.get_flag("choose") {
        let labels: Vec<&str> = Severity::ALL.iter().map(|s| s.label()).collect();
        let index = match prompt::select_option("Select a new log level:", &labels) {
            Ok(index) => index,
            Err(error) => {
                eprintln!("conlog: {error}");
                return ExitCode::FAILURE;
            }
        };
        console::set_threshold(Severity::ALL[index]);
        log_info!("Log level set to {}", Severity::ALL[index]);
        emit_samples();
    }

    ExitCode::SUCCESS
}
