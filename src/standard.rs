//! Helpers for ISO 32000-1:2008 compliance.
//!
//! # Lines
//!
//! Document syntax is organised in lines. A line ends with one of three
//! End-Of-Line (EOL) markers:
//!
//! | Marker | Bytes | [`EndOfLine`] |
//! |--------|-------|---------------|
//! | LINE FEED | `0A` | [`EndOfLine::LineFeed`] |
//! | CARRIAGE RETURN | `0D` | [`EndOfLine::CarriageReturn`] |
//! | CARRIAGE RETURN + LINE FEED | `0D 0A` | [`EndOfLine::Both`] |
//!
//! **Rules**:
//! - A `0D 0A` pair is a single marker, never two.
//! - A marker is identified from its first byte. Looking at the `0A` of a `0D 0A`
//!   pair on its own reports a LINE FEED.
//! - Lines should not exceed [`MAX_LINE_LENGTH`] bytes, EOL excluded.
//!
//! # Comments
//!
//! A comment starts with `%` and runs to the end of the line, so its content can
//! never contain an EOL marker. The file header is written as comments:
//!
//! ```text
//! %PDF-1.7
//! %âãÏÓ
//! ```
//!
//! The second line is only present in binary documents; it holds at least four
//! bytes of 128 or above.
//!
//! # Names
//!
//! A name is `/` followed by its identifier. Bytes outside the regular range
//! `!`..`~`, delimiters and `#` are written as `#` plus two hexadecimal digits:
//!
//! ```text
//! /Type
//! /A#20B
//! ```

use crate::eol::{self, EndOfLine};
use crate::Result;

/// Recommended maximum number of bytes on a single line, EOL excluded.
pub const MAX_LINE_LENGTH: usize = 255;

/// Gets the EOL marker that starts at `position` in `raw`.
///
/// This is [`eol::classify`] under the name the rest of the syntax layer uses.
///
/// # Examples
///
/// ```rust
/// use portable_document::{end_of_line_marker, EndOfLine};
///
/// assert_eq!(end_of_line_marker(b"\r", 0).unwrap(), Some(EndOfLine::CarriageReturn));
/// assert_eq!(end_of_line_marker(b"a\n", 0).unwrap(), None);
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `position` is not a
/// valid index in `raw`.
pub fn end_of_line_marker(raw: &[u8], position: usize) -> Result<Option<EndOfLine>> {
    eol::classify(raw, position)
}
