//! Error types for the byte-level document syntax layer.
//!
//! Every fallible operation in this crate returns [`Result`], and every failure is
//! one variant of [`Error`]. Nothing is logged or swallowed internally; errors
//! propagate straight to the caller.
//!
//! ## Error Categories
//!
//! - **Invalid state**: an operation that needs data was invoked on a null
//!   [`BinaryString`](crate::BinaryString)
//! - **Out of range**: a position or start index outside `[0, len)`, including any
//!   index into a zero-length buffer
//! - **Format / invalid argument**: input rejected by the syntax writer or an element
//!   constructor (embedded EOL marker, non-ASCII comment, zero byte in a name)
//! - **Syntax**: the document syntax would be invalid, e.g. a line that is too long
//! - **I/O**: the underlying output failed
//!
//! ## Examples
//!
//! ```rust
//! use portable_document::{BinaryString, Error};
//!
//! let err = BinaryString::NULL.find_end_of_line().unwrap_err();
//! assert!(matches!(err, Error::InvalidState(_)));
//!
//! let err = BinaryString::new(Vec::new()).find_end_of_line().unwrap_err();
//! assert!(matches!(err, Error::OutOfRange { argument: "start", .. }));
//! ```

use std::io;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
///
/// None of these conditions are worth retrying: the caller passed an invalid value
/// or state and has to fix the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation is not valid for the current state of the value
    #[error("Invalid operation: {0}")]
    InvalidState(String),

    /// An index argument is outside the valid domain of the buffer
    #[error("Argument `{argument}` is out of range: {value} is not a valid index for length {len}")]
    OutOfRange {
        argument: &'static str,
        value: usize,
        len: usize,
    },

    /// Input that cannot be expressed in the requested syntax
    #[error("Format error: {0}")]
    Format(String),

    /// An argument violates a documented constraint
    #[error("Invalid argument `{argument}`: {msg}")]
    InvalidArgument { argument: &'static str, msg: String },

    /// The document syntax is not valid, for rules without a dedicated variant
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// A syntax line would exceed the maximum length
    #[error("Syntax error: line of {length} bytes exceeds the limit of {limit} bytes")]
    LineTooLong { length: usize, limit: usize },

    /// I/O error from the underlying output
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an invalid state error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portable_document::Error;
    ///
    /// let err = Error::invalid_state("the object is null");
    /// assert_eq!(err.to_string(), "Invalid operation: the object is null");
    /// ```
    pub fn invalid_state(msg: &str) -> Self {
        Error::InvalidState(msg.to_string())
    }

    /// Creates an out-of-range error naming the offending argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portable_document::Error;
    ///
    /// let err = Error::out_of_range("position", 3, 2);
    /// assert!(err.to_string().contains("`position`"));
    /// ```
    pub fn out_of_range(argument: &'static str, value: usize, len: usize) -> Self {
        Error::OutOfRange {
            argument,
            value,
            len,
        }
    }

    /// Creates a format error.
    pub fn format(msg: &str) -> Self {
        Error::Format(msg.to_string())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(argument: &'static str, msg: &str) -> Self {
        Error::InvalidArgument {
            argument,
            msg: msg.to_string(),
        }
    }

    /// Creates a general syntax error.
    ///
    /// [`Error::Syntax`] is the catch-all category for invalid document syntax that
    /// has no dedicated variant; [`Error::LineTooLong`] belongs to the same category.
    pub fn syntax(msg: &str) -> Self {
        Error::Syntax(msg.to_string())
    }

    /// Creates a line-too-long error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portable_document::Error;
    ///
    /// let err = Error::line_too_long(300, 255);
    /// assert!(err.is_syntax());
    /// assert!(err.to_string().contains("300 bytes"));
    /// ```
    pub fn line_too_long(length: usize, limit: usize) -> Self {
        Error::LineTooLong { length, limit }
    }

    /// Returns `true` for every error describing invalid document syntax.
    ///
    /// [`Error::LineTooLong`] is a specific kind of syntax error.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_) | Error::LineTooLong { .. })
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
