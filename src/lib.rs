//! # portable_document
//!
//! The byte-level foundation for emitting ISO 32000-1 (PDF) document syntax.
//!
//! ## What is in here?
//!
//! - **[`BinaryString`]**: a byte sequence with a null state that is distinct from
//!   the empty sequence
//! - **EOL handling**: [`eol::classify`] tells which of the three End-Of-Line markers
//!   starts at an offset, [`eol::find_from`] finds the next one
//! - **[`SyntaxWriter`]**: the contract document elements write through, with
//!   [`Writer`] implementing it over any [`std::io::Write`]
//! - **[`element`]**: the file header and name objects
//!
//! ## Quick Start
//!
//! ```rust
//! use portable_document::{BinaryString, EndOfLine};
//!
//! let data = BinaryString::from(b"%PDF-1.7\r\n%\x80\x80\x80\x80\n");
//!
//! // The CR LF pair is reported once, at the CR.
//! assert_eq!(data.find_end_of_line().unwrap(), Some((8, EndOfLine::Both)));
//! assert_eq!(data.find_end_of_line_from(10).unwrap(), Some((15, EndOfLine::LineFeed)));
//! ```
//!
//! ### Writing a header
//!
//! ```rust
//! use portable_document::element::{DocumentElement, DocumentType, FileHeader};
//! use portable_document::{EndOfLine, Writer, WriterOptions};
//!
//! let options = WriterOptions::new().with_end_of_line(EndOfLine::Both);
//! let mut writer = Writer::with_options(Vec::new(), options);
//!
//! FileHeader::new(1, 7, DocumentType::Binary).write(&mut writer).unwrap();
//!
//! assert_eq!(writer.into_inner(), b"%PDF-1.7\r\n%\x80\x80\x80\x80\r\n");
//! ```
//!
//! ## Null vs empty
//!
//! ```rust
//! use portable_document::BinaryString;
//!
//! assert_eq!(BinaryString::NULL, BinaryString::null());
//! assert_eq!(BinaryString::new(Vec::new()), BinaryString::from(b""));
//! assert_ne!(BinaryString::NULL, BinaryString::new(Vec::new()));
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing is bounds-checked and reported as [`Error::OutOfRange`]
//! - No panics in the public API

pub mod binary_string;
pub mod character;
pub mod element;
pub mod eol;
pub mod error;
pub mod options;
pub mod standard;
pub mod writer;

pub use binary_string::BinaryString;
pub use eol::{EndOfLine, ScanResult};
pub use error::{Error, Result};
pub use options::WriterOptions;
pub use standard::{end_of_line_marker, MAX_LINE_LENGTH};
pub use writer::{SyntaxWriter, Writer};
