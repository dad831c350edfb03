//! crates/logging/src/location.rs
//! Call-site capture for located log messages.

use std::borrow::Cow;
use std::fmt;

/// Returns the final path component of `path`.
///
/// Strips everything up to and including the last `/`, falling back to the
/// last `\` so locations captured on Windows render the same way. A string
/// with neither separator is returned unchanged.
///
/// # Examples
///
/// ```
/// use logging::file_basename;
///
/// assert_eq!(file_basename("/a/b/c.ext"), "c.ext");
/// assert_eq!(file_basename("c:\\a\\b.ext"), "b.ext");
/// assert_eq!(file_basename("plain.ext"), "plain.ext");
/// ```
#[must_use]
pub fn file_basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => match path.rfind('\\') {
            Some(index) => &path[index + 1..],
            None => path,
        },
    }
}

/// Source location associated with a located log call.
///
/// The path is stored borrowed when it comes from `file!()`, so capturing a
/// location allocates nothing.
///
/// # Examples
///
/// ```
/// use logging::SourceLocation;
///
/// let location = SourceLocation::new("src/lib.rs", 120);
/// assert_eq!(location.line(), 120);
/// assert_eq!(location.file_name(), "lib.rs");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    path: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a path and a line number.
    #[must_use]
    pub fn new<P: Into<Cow<'static, str>>>(path: P, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    /// Returns the path as recorded at the call site.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the final component of the recorded path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_basename(&self.path)
    }

    /// Returns the recorded line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_unix_separators() {
        assert_eq!(file_basename("/a/b/c.ext"), "c.ext");
        assert_eq!(file_basename("crates/logging/src/lib.rs"), "lib.rs");
    }

    #[test]
    fn basename_strips_windows_separators() {
        assert_eq!(file_basename("c:\\a\\b.ext"), "b.ext");
    }

    #[test]
    fn basename_prefers_the_last_forward_slash() {
        // Mixed separators: the forward slash wins, matching the lookup order.
        assert_eq!(file_basename("a\\b/c.ext"), "c.ext");
    }

    #[test]
    fn basename_passes_plain_names_through() {
        assert_eq!(file_basename("plain.ext"), "plain.ext");
        assert_eq!(file_basename(""), "");
    }

    #[test]
    fn display_renders_basename_and_line() {
        let location = SourceLocation::new("/tmp/deep/path/main.rs", 42);
        assert_eq!(location.to_string(), "main.rs:42");
        assert_eq!(location.path(), "/tmp/deep/path/main.rs");
    }
}
