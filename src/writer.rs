//! Writing document syntax.
//!
//! [`SyntaxWriter`] is the contract document elements write themselves through.
//! [`Writer`] implements it on top of any [`std::io::Write`], keeping track of the
//! current line so that no line exceeds the configured limit.
//!
//! ## Examples
//!
//! ```rust
//! use portable_document::{SyntaxWriter, Writer};
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_comment_str("PDF-1.7").unwrap();
//! writer.write_name(b"Type").unwrap();
//!
//! assert_eq!(writer.into_inner(), b"%PDF-1.7\n/Type");
//! ```

use crate::eol;
use crate::{Error, Result, WriterOptions};
use std::io;

/// A stateful writer of document syntax.
pub trait SyntaxWriter {
    /// Writes a comment holding binary data.
    ///
    /// # Errors
    ///
    /// - [`Error::Format`] if `value` contains one or more EOL markers.
    /// - [`Error::LineTooLong`] if the resulting line is too long.
    fn write_comment(&mut self, value: &[u8]) -> Result<()>;

    /// Writes a comment holding an ASCII string.
    ///
    /// # Errors
    ///
    /// - [`Error::Format`] if `value` is not ASCII or contains EOL markers.
    /// - [`Error::LineTooLong`] if the resulting line is too long.
    fn write_comment_str(&mut self, value: &str) -> Result<()> {
        if !value.is_ascii() {
            return Err(Error::format("the comment is not an ASCII string"));
        }
        self.write_comment(value.as_bytes())
    }

    /// Writes a name object.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `id` contains a zero byte.
    /// - [`Error::LineTooLong`] if the name does not fit on a line.
    fn write_name(&mut self, id: &[u8]) -> Result<()>;
}

impl<W: SyntaxWriter + ?Sized> SyntaxWriter for &mut W {
    fn write_comment(&mut self, value: &[u8]) -> Result<()> {
        (**self).write_comment(value)
    }

    fn write_comment_str(&mut self, value: &str) -> Result<()> {
        (**self).write_comment_str(value)
    }

    fn write_name(&mut self, id: &[u8]) -> Result<()> {
        (**self).write_name(id)
    }
}

/// Writes document syntax to an [`io::Write`].
///
/// Nothing is written when a call fails validation, so the output stays valid
/// syntax after an error other than [`Error::Io`].
#[derive(Debug)]
pub struct Writer<W> {
    output: W,
    options: WriterOptions,
    column: usize,
}

impl<W: io::Write> Writer<W> {
    /// Creates a writer with default options.
    pub fn new(output: W) -> Self {
        Self::with_options(output, WriterOptions::default())
    }

    /// Creates a writer with custom options.
    pub fn with_options(output: W, options: WriterOptions) -> Self {
        Writer {
            output,
            options,
            column: 0,
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Number of bytes written on the current line so far.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    /// Consumes the writer, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn end_line(&mut self) -> Result<()> {
        self.output.write_all(self.options.end_of_line.as_bytes())?;
        self.column = 0;
        Ok(())
    }

    fn check_line(&self, length: usize) -> Result<()> {
        if length > self.options.max_line_length {
            return Err(Error::line_too_long(length, self.options.max_line_length));
        }
        Ok(())
    }
}

impl<W: io::Write> SyntaxWriter for Writer<W> {
    fn write_comment(&mut self, value: &[u8]) -> Result<()> {
        // find_from rejects an empty buffer, which trivially has no marker.
        if !value.is_empty() {
            if let Some((position, kind)) = eol::find_from(value, 0)? {
                return Err(Error::format(&format!(
                    "the comment contains an EOL marker ({:?}) at offset {}",
                    kind, position
                )));
            }
        }

        let length = 1 + value.len();
        self.check_line(length)?;

        if self.column > 0 && self.column + length > self.options.max_line_length {
            self.end_line()?;
            tracing::trace!("line wrapped before comment");
        }

        let column = self.column;
        self.output.write_all(b"%")?;
        self.output.write_all(value)?;
        self.end_line()?;

        tracing::trace!(length, column, "comment written");
        Ok(())
    }

    fn write_name(&mut self, id: &[u8]) -> Result<()> {
        if id.contains(&0) {
            return Err(Error::invalid_argument(
                "id",
                "the value contains one or more zero bytes",
            ));
        }

        let token = encode_name(id);
        self.check_line(token.len())?;

        if self.column > 0 && self.column + token.len() > self.options.max_line_length {
            self.end_line()?;
            tracing::trace!("line wrapped before name");
        }

        self.output.write_all(&token)?;
        self.column += token.len();

        tracing::trace!(length = token.len(), column = self.column, "name written");
        Ok(())
    }
}

fn is_delimiter(byte: u8) -> bool {
    matches!(
        byte,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Encodes a name identifier as a `/`-prefixed token.
fn encode_name(id: &[u8]) -> Vec<u8> {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut token = Vec::with_capacity(id.len() + 1);
    token.push(b'/');

    for &byte in id {
        if (b'!'..=b'~').contains(&byte) && byte != b'#' && !is_delimiter(byte) {
            token.push(byte);
        } else {
            token.push(b'#');
            token.push(HEX[usize::from(byte >> 4)]);
            token.push(HEX[usize::from(byte & 0x0F)]);
        }
    }

    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EndOfLine;

    #[test]
    fn test_encode_name_regular() {
        assert_eq!(encode_name(b"Type"), b"/Type");
        assert_eq!(encode_name(b""), b"/");
    }

    #[test]
    fn test_encode_name_escapes() {
        assert_eq!(encode_name(b"A B"), b"/A#20B");
        assert_eq!(encode_name(b"a#b"), b"/a#23b");
        assert_eq!(encode_name(b"(x)"), b"/#28x#29");
        assert_eq!(encode_name(&[0x80, 0xFF]), b"/#80#FF");
    }

    #[test]
    fn test_comment_uses_configured_end_of_line() {
        let options = WriterOptions::new().with_end_of_line(EndOfLine::Both);
        let mut writer = Writer::with_options(Vec::new(), options);
        writer.write_comment(b"x").unwrap();
        assert_eq!(writer.into_inner(), b"%x\r\n");
    }

    #[test]
    fn test_empty_comment() {
        let mut writer = Writer::new(Vec::new());
        writer.write_comment(b"").unwrap();
        assert_eq!(writer.into_inner(), b"%\n");
    }

    #[test]
    fn test_comment_after_name_shares_line_when_it_fits() {
        let options = WriterOptions::new().with_max_line_length(6);
        let mut writer = Writer::with_options(Vec::new(), options);
        writer.write_name(b"AB").unwrap();
        assert_eq!(writer.column(), 3);

        writer.write_comment(b"xy").unwrap();
        assert_eq!(writer.column(), 0);
        assert_eq!(writer.into_inner(), b"/AB%xy\n");
    }

    #[test]
    fn test_comment_longer_than_any_line() {
        let options = WriterOptions::new().with_max_line_length(6);
        let mut writer = Writer::with_options(Vec::new(), options);
        writer.write_name(b"AB").unwrap();

        let err = writer.write_comment(b"abcdef").unwrap_err();
        assert_eq!(err, Error::line_too_long(7, 6));
        assert_eq!(writer.column(), 3);
        assert_eq!(writer.into_inner(), b"/AB");
    }
}
