//! Configuration options for the syntax [`Writer`](crate::Writer).
//!
//! ## Examples
//!
//! ```rust
//! use portable_document::{EndOfLine, Writer, WriterOptions};
//!
//! let options = WriterOptions::new()
//!     .with_end_of_line(EndOfLine::Both)
//!     .with_max_line_length(80);
//!
//! let mut writer = Writer::with_options(Vec::new(), options);
//! ```

use crate::eol::EndOfLine;
use crate::standard::MAX_LINE_LENGTH;
use serde::{Deserialize, Serialize};

/// Configuration options for writing document syntax.
///
/// Options can also be loaded from any serde format; missing fields take their
/// default values.
///
/// # Examples
///
/// ```rust
/// use portable_document::{EndOfLine, WriterOptions};
///
/// let options = WriterOptions::new();
/// assert_eq!(options.end_of_line, EndOfLine::LineFeed);
/// assert_eq!(options.max_line_length, 255);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Marker written at the end of every line.
    pub end_of_line: EndOfLine,
    /// Maximum number of bytes on a line, EOL excluded.
    pub max_line_length: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            end_of_line: EndOfLine::default(),
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}

impl WriterOptions {
    /// Creates default options (LINE FEED, 255-byte lines).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker written at the end of every line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portable_document::{EndOfLine, WriterOptions};
    ///
    /// let options = WriterOptions::new().with_end_of_line(EndOfLine::CarriageReturn);
    /// assert_eq!(options.end_of_line, EndOfLine::CarriageReturn);
    /// ```
    #[must_use]
    pub fn with_end_of_line(mut self, end_of_line: EndOfLine) -> Self {
        self.end_of_line = end_of_line;
        self
    }

    /// Sets the maximum number of bytes on a line.
    #[must_use]
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = WriterOptions::new()
            .with_end_of_line(EndOfLine::Both)
            .with_max_line_length(72);
        assert_eq!(options.end_of_line, EndOfLine::Both);
        assert_eq!(options.max_line_length, 72);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let options: WriterOptions = serde_json::from_str(r#"{"end_of_line":"both"}"#).unwrap();
        assert_eq!(options.end_of_line, EndOfLine::Both);
        assert_eq!(options.max_line_length, MAX_LINE_LENGTH);
    }
}
