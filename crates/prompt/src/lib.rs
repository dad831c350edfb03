#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `prompt` presents a message and a numbered list of choices on the
//! console, reads a line of input, and returns the zero-based index of the
//! selected option. Invalid and out-of-range input is recovered locally:
//! the prompt warns and redisplays the menu, without a retry cap.
//!
//! # Design
//!
//! [`Prompt`] is generic over a [`BufRead`](std::io::BufRead) reader and an
//! [`io::Write`](std::io::Write) writer, so tests can script the dialogue
//! with in-memory buffers. [`select_option`] is the convenience entry point
//! bound to locked stdin/stdout with terminal-detected coloring. Retry
//! feedback renders through the logging crate's warning format so prompt
//! output matches the rest of the console.
//!
//! # Invariants
//!
//! - Precondition violations (empty message, no options) error out before
//!   anything is printed.
//! - The choice line `Enter choice (1-N): ` is written without a trailing
//!   newline and flushed, so input is read on the same visual line.
//! - The loop only ends with a valid selection or an I/O condition; bad
//!   input alone never terminates it.
//!
//! # Errors
//!
//! All failures surface as [`PromptError`]. End of input is an explicit
//! [`PromptError::Eof`] rather than a busy loop on a closed stream.
//!
//! # Examples
//!
//! Script a selection with in-memory buffers:
//!
//! ```
//! use std::io::Cursor;
//! use prompt::Prompt;
//!
//! let input = Cursor::new(b"2\n".to_vec());
//! let mut prompt = Prompt::new(input, Vec::new());
//! let choice = prompt.select("Pick a transfer mode:", &["push", "pull"])?;
//! assert_eq!(choice, 1);
//!
//! let (_, output) = prompt.into_parts();
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("  1) push"));
//! assert!(text.contains("Enter choice (1-2): "));
//! # Ok::<(), prompt::PromptError>(())
//! ```

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use is_terminal::IsTerminal;
use logging::{RESET_COLOR, Severity, render_plain};

/// Errors returned when a prompt cannot produce a selection.
#[derive(Debug)]
pub enum PromptError {
    /// The prompt message was empty.
    EmptyMessage,
    /// The options collection was empty.
    NoOptions,
    /// The input stream reached end of file before a valid choice.
    Eof,
    /// Reading input or writing the menu failed.
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => f.write_str("prompt message must not be empty"),
            Self::NoOptions => f.write_str("prompt requires at least one option"),
            Self::Eof => f.write_str("input stream closed before a choice was made"),
            Self::Io(error) => write!(f, "prompt I/O failed: {error}"),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

/// Interactive numbered-choice prompt over explicit streams.
///
/// Options render 1-based (`  1) label`); the returned index is zero-based.
///
/// # Examples
///
/// Invalid input warns and retries until a valid choice arrives:
///
/// ```
/// use std::io::Cursor;
/// use prompt::Prompt;
///
/// let input = Cursor::new(b"zero\n1\n".to_vec());
/// let mut prompt = Prompt::new(input, Vec::new());
/// let choice = prompt.select("Continue?", &["yes", "no"])?;
/// assert_eq!(choice, 0);
/// # Ok::<(), prompt::PromptError>(())
/// ```
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    colors: bool,
}

impl<R, W> Prompt<R, W> {
    /// Creates a prompt over the given streams with colors disabled.
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            colors: false,
        }
    }

    /// Enables or disables colorized output.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Consumes the prompt and returns the reader and writer.
    #[must_use]
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R, W> Prompt<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Runs the selection dialogue and returns the zero-based choice.
    ///
    /// The menu redisplays after every rejected input; the loop has no
    /// retry cap and ends only with a valid selection, end of input
    /// ([`PromptError::Eof`]), or a stream failure.
    pub fn select<S: AsRef<str>>(
        &mut self,
        message: &str,
        options: &[S],
    ) -> Result<usize, PromptError> {
        if message.is_empty() {
            return Err(PromptError::EmptyMessage);
        }
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }

        loop {
            self.render_menu(message, options)?;

            let Some(line) = read_trimmed_line(&mut self.reader)? else {
                return Err(PromptError::Eof);
            };

            match line.trim().parse::<i64>() {
                Ok(choice) if (1..=options.len() as i64).contains(&choice) => {
                    return Ok(choice as usize - 1);
                }
                Ok(_) => {
                    self.warn(format_args!("Choice out of range. Please try again."))?;
                }
                Err(_) => {
                    self.warn(format_args!("Invalid input. Please enter a number."))?;
                }
            }
        }
    }

    fn render_menu<S: AsRef<str>>(&mut self, message: &str, options: &[S]) -> io::Result<()> {
        if self.colors {
            writeln!(
                self.writer,
                "{}{}{}",
                Severity::Info.color_code(),
                message,
                RESET_COLOR
            )?;
        } else {
            writeln!(self.writer, "{message}")?;
        }
        for (index, label) in options.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", index + 1, label.as_ref())?;
        }
        write!(self.writer, "Enter choice (1-{}): ", options.len())?;
        self.writer.flush()
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        render_plain(&mut self.writer, Severity::Warning, self.colors, args)
    }
}

/// Reads one line, retrying interrupted reads and stripping the terminator.
///
/// Returns `Ok(None)` at end of input.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();

    let bytes = loop {
        match reader.read_line(&mut line) {
            Ok(bytes) => break bytes,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                line.clear();
            }
            Err(error) => return Err(error),
        }
    };

    if bytes == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}

/// Prompts on the process console and returns the zero-based choice.
///
/// Binds a [`Prompt`] to locked stdin/stdout, colorizing when stdout is a
/// terminal. Blocks until the user enters a valid selection.
pub fn select_option<S: AsRef<str>>(message: &str, options: &[S]) -> Result<usize, PromptError> {
    let colors = io::stdout().is_terminal();
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout().lock()).colors(colors);
    prompt.select(message, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, options: &[&str]) -> (Result<usize, PromptError>, String) {
        let mut prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = prompt.select("Pick one:", options);
        let (_, output) = prompt.into_parts();
        (result, String::from_utf8(output).expect("utf-8"))
    }

    #[test]
    fn first_valid_input_returns_zero_based_index() {
        let (result, output) = run("3\n", &["a", "b", "c"]);
        assert_eq!(result.unwrap(), 2);
        assert!(output.contains("  3) c"));
        assert!(output.ends_with("Enter choice (1-3): "));
    }

    #[test]
    fn crlf_terminated_input_is_accepted() {
        let (result, _) = run("2\r\n", &["a", "b"]);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let (result, _) = run("  2 \n", &["a", "b"]);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn empty_message_is_rejected_before_output() {
        let mut prompt = Prompt::new(Cursor::new(b"1\n".to_vec()), Vec::new());
        let result = prompt.select("", &["a"]);
        assert!(matches!(result, Err(PromptError::EmptyMessage)));
        let (_, output) = prompt.into_parts();
        assert!(output.is_empty());
    }

    #[test]
    fn empty_options_are_rejected_before_output() {
        let mut prompt = Prompt::new(Cursor::new(b"1\n".to_vec()), Vec::new());
        let result = prompt.select("Pick one:", &[] as &[&str]);
        assert!(matches!(result, Err(PromptError::NoOptions)));
        let (_, output) = prompt.into_parts();
        assert!(output.is_empty());
    }

    #[test]
    fn end_of_input_surfaces_eof() {
        let (result, output) = run("", &["a"]);
        assert!(matches!(result, Err(PromptError::Eof)));
        assert!(output.contains("Enter choice (1-1): "));
    }

    #[test]
    fn negative_numbers_are_out_of_range_not_invalid() {
        let (result, output) = run("-1\n1\n", &["a", "b"]);
        assert_eq!(result.unwrap(), 0);
        assert!(output.contains("Choice out of range. Please try again."));
        assert!(!output.contains("Invalid input."));
    }
}
