//! Null-aware binary strings.
//!
//! [`BinaryString`] holds either no data at all ([`BinaryString::Null`]) or an owned,
//! immutable byte sequence. The null state is not the same thing as an empty
//! sequence: the two never compare equal, and every operation that needs data
//! fails on null with [`Error::InvalidState`] instead of acting as if it were empty.
//!
//! ## Examples
//!
//! ```rust
//! use portable_document::{BinaryString, EndOfLine};
//!
//! let line = BinaryString::from(b"%PDF-1.7\r\n");
//! assert_eq!(line.find_end_of_line().unwrap(), Some((8, EndOfLine::Both)));
//!
//! assert_ne!(BinaryString::NULL, BinaryString::from(Vec::new()));
//! assert!(BinaryString::NULL.iter().is_err());
//! ```

use crate::eol::{self, EndOfLine};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::iter::Copied;
use std::slice;

const NULL_MESSAGE: &str = "the binary string is null";

/// Iterator over the bytes of a non-null [`BinaryString`].
pub type Iter<'a> = Copied<slice::Iter<'a, u8>>;

/// A binary string whose null state is distinct from the empty sequence.
///
/// The value never changes after construction, so it can be shared freely between
/// threads.
#[derive(Clone, Debug, Default)]
pub enum BinaryString {
    /// No underlying data.
    #[default]
    Null,
    /// An owned byte sequence, possibly empty.
    Bytes(Vec<u8>),
}

impl BinaryString {
    /// The null instance.
    pub const NULL: BinaryString = BinaryString::Null;

    /// Creates a null binary string.
    #[must_use]
    pub const fn null() -> Self {
        BinaryString::Null
    }

    /// Creates a non-null binary string from `data`.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        BinaryString::Bytes(data.into())
    }

    /// Returns `true` if this value holds no data.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, BinaryString::Null)
    }

    /// Returns the bytes, or `None` for the null instance.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            BinaryString::Null => None,
            BinaryString::Bytes(data) => Some(data),
        }
    }

    fn data(&self) -> Result<&[u8]> {
        self.as_bytes().ok_or_else(|| Error::invalid_state(NULL_MESSAGE))
    }

    /// Returns the number of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the value is null.
    pub fn len(&self) -> Result<usize> {
        Ok(self.data()?.len())
    }

    /// Returns `true` if the value holds a zero-length sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the value is null.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.data()?.is_empty())
    }

    /// Returns an iterator over the bytes in their original order.
    ///
    /// Every call starts a fresh iteration from the first byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the value is null; a null string has no
    /// bytes to iterate, which is different from having zero of them.
    pub fn iter(&self) -> Result<Iter<'_>> {
        Ok(self.data()?.iter().copied())
    }

    /// Checks whether `position` is the start of an EOL marker.
    ///
    /// See [`eol::classify`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the value is null and
    /// [`Error::OutOfRange`] if `position` is not a valid index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portable_document::{BinaryString, EndOfLine};
    ///
    /// let value = BinaryString::from(b"\r\n");
    /// assert_eq!(value.end_of_line_at(0).unwrap(), Some(EndOfLine::Both));
    /// assert_eq!(value.end_of_line_at(1).unwrap(), Some(EndOfLine::LineFeed));
    /// assert!(value.end_of_line_at(2).is_err());
    /// ```
    pub fn end_of_line_at(&self, position: usize) -> Result<Option<EndOfLine>> {
        eol::classify(self.data()?, position)
    }

    /// Searches for the first EOL marker from the beginning of the value.
    ///
    /// Equivalent to `find_end_of_line_from(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the value is null and
    /// [`Error::OutOfRange`] if the value is empty.
    pub fn find_end_of_line(&self) -> Result<Option<(usize, EndOfLine)>> {
        self.find_end_of_line_from(0)
    }

    /// Searches for the first EOL marker at or after `start`.
    ///
    /// See [`eol::find_from`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the value is null and
    /// [`Error::OutOfRange`] if `start` is not a valid index.
    pub fn find_end_of_line_from(&self, start: usize) -> Result<Option<(usize, EndOfLine)>> {
        eol::find_from(self.data()?, start)
    }
}

impl PartialEq for BinaryString {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BinaryString::Null, BinaryString::Null) => true,
            (BinaryString::Bytes(left), BinaryString::Bytes(right)) => {
                left.as_slice() == right.as_slice()
            }
            _ => false,
        }
    }
}

impl Eq for BinaryString {}

impl Hash for BinaryString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            BinaryString::Null => state.write_u8(0),
            BinaryString::Bytes(data) => {
                state.write_u8(1);
                data.hash(state);
            }
        }
    }
}

impl From<Vec<u8>> for BinaryString {
    fn from(data: Vec<u8>) -> Self {
        BinaryString::Bytes(data)
    }
}

impl From<&[u8]> for BinaryString {
    fn from(data: &[u8]) -> Self {
        BinaryString::Bytes(data.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for BinaryString {
    fn from(data: &[u8; N]) -> Self {
        BinaryString::Bytes(data.to_vec())
    }
}

impl From<Option<Vec<u8>>> for BinaryString {
    fn from(data: Option<Vec<u8>>) -> Self {
        data.map_or(BinaryString::Null, BinaryString::Bytes)
    }
}

impl TryFrom<BinaryString> for Vec<u8> {
    type Error = Error;

    fn try_from(value: BinaryString) -> Result<Self> {
        match value {
            BinaryString::Null => Err(Error::invalid_state(NULL_MESSAGE)),
            BinaryString::Bytes(data) => Ok(data),
        }
    }
}

impl<'a> TryFrom<&'a BinaryString> for &'a [u8] {
    type Error = Error;

    fn try_from(value: &'a BinaryString) -> Result<Self> {
        value.data()
    }
}

impl Serialize for BinaryString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BinaryString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<Vec<u8>>::deserialize(deserializer).map(BinaryString::from)
    }
}
