//! Integration tests for the rendered line formats.
//!
//! The exact console formats are part of the crate's contract:
//! `[<LABEL>]: <message>` for plain lines and
//! `[<LABEL>] <file>:<line>: <message>` for located lines, with color
//! escapes wrapping only the label when colors are enabled.

use logging::{
    ColorMode, LogConfig, Logger, RESET_COLOR, Severity, SourceLocation, level_color, level_label,
    render_located, render_plain,
};

fn logger_with_colors(colors: ColorMode) -> Logger<Vec<u8>> {
    let config = LogConfig::default()
        .with_threshold(Severity::Debug)
        .with_colors(colors);
    Logger::with_config(Vec::new(), config)
}

// ============================================================================
// Plain Format Tests
// ============================================================================

/// Verifies the plain format for every severity label.
#[test]
fn plain_lines_carry_bracketed_labels() {
    let mut logger = logger_with_colors(ColorMode::Never);
    for severity in Severity::ALL {
        logger
            .log(severity, format_args!("payload"))
            .expect("log succeeds");
    }

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    let expected = "\
[DEBUG]: payload
[INFO]: payload
[WARNING]: payload
[ERROR]: payload
[CRITICAL]: payload
";
    assert_eq!(output, expected);
}

/// Verifies color escapes wrap the label and nothing else.
#[test]
fn colored_lines_reset_immediately_after_the_label() {
    for severity in Severity::ALL {
        let mut out = Vec::new();
        render_plain(&mut out, severity, true, format_args!("body")).expect("render");
        let line = String::from_utf8(out).expect("utf-8");
        let expected = format!(
            "[{}{}{}]: body\n",
            severity.color_code(),
            severity.label(),
            RESET_COLOR
        );
        assert_eq!(line, expected);
    }
}

/// Verifies the documented color assignment per severity.
#[test]
fn severity_colors_match_the_documented_palette() {
    assert_eq!(Severity::Debug.color_code(), "\x1b[36m");
    assert_eq!(Severity::Info.color_code(), "\x1b[32m");
    assert_eq!(Severity::Warning.color_code(), "\x1b[33m");
    assert_eq!(Severity::Error.color_code(), "\x1b[31m");
    assert_eq!(Severity::Critical.color_code(), "\x1b[35m");
}

// ============================================================================
// Color-Disabled Tests
// ============================================================================

/// Verifies no escape sequence is emitted at any severity when colors are
/// disabled.
#[test]
fn disabled_colors_never_emit_escapes() {
    let mut logger = logger_with_colors(ColorMode::Never);
    for severity in Severity::ALL {
        logger
            .log(severity, format_args!("plain"))
            .expect("log succeeds");
        let location = SourceLocation::new("src/lib.rs", 1);
        logger
            .log_with_location(severity, &location, format_args!("located"))
            .expect("log succeeds");
    }

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    assert!(
        !output.contains('\x1b'),
        "color-disabled output must not contain escapes: {output:?}"
    );
}

/// Verifies Auto resolves to no color for an arbitrary writer.
#[test]
fn auto_colors_stay_off_for_buffers() {
    let mut logger = logger_with_colors(ColorMode::Auto);
    logger
        .log(Severity::Critical, format_args!("x"))
        .expect("log succeeds");
    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    assert!(!output.contains('\x1b'));
}

// ============================================================================
// Located Format Tests
// ============================================================================

/// Verifies the located prefix renders as `basename:line` between the tag
/// and the message body.
#[test]
fn located_lines_show_basename_and_line() {
    let mut logger = logger_with_colors(ColorMode::Never);
    let location = SourceLocation::new("/home/build/project/src/engine/delta.rs", 412);
    logger
        .log_with_location(Severity::Error, &location, format_args!("window underrun"))
        .expect("log succeeds");

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    assert_eq!(output, "[ERROR] delta.rs:412: window underrun\n");
}

/// Verifies located rendering keeps the color placement of plain lines.
#[test]
fn located_lines_colorize_only_the_label() {
    let mut out = Vec::new();
    let location = SourceLocation::new("panic.rs", 1);
    render_located(
        &mut out,
        Severity::Critical,
        true,
        &location,
        format_args!("down"),
    )
    .expect("render");

    assert_eq!(
        String::from_utf8(out).expect("utf-8"),
        "[\x1b[35mCRITICAL\x1b[0m] panic.rs:1: down\n"
    );
}

// ============================================================================
// Fallback Metadata Tests
// ============================================================================

/// Verifies raw severity values outside the enumeration render the UNKNOWN
/// tag with no color.
#[test]
fn out_of_range_levels_fall_back_to_unknown() {
    assert_eq!(level_label(5), "UNKNOWN");
    assert_eq!(level_label(200), "UNKNOWN");
    assert_eq!(level_color(5), "");
    for severity in Severity::ALL {
        assert_eq!(level_label(severity as u8), severity.label());
        assert_eq!(level_color(severity as u8), severity.color_code());
    }
}
