//! End-Of-Line (EOL) marker classification and search.
//!
//! Three encodings terminate a line in document syntax: a single LINE FEED, a single
//! CARRIAGE RETURN, or a CARRIAGE RETURN immediately followed by a LINE FEED. This
//! module decides which of them starts at a given offset ([`classify`]) and locates
//! the first one at or after an offset ([`find_from`]).
//!
//! Classification only ever looks forward. A LINE FEED is reported as
//! [`EndOfLine::LineFeed`] even when the byte before it is a CARRIAGE RETURN, so a
//! `CR LF` pair is only recognized as [`EndOfLine::Both`] when classified at the CR.
//!
//! ## Examples
//!
//! ```rust
//! use portable_document::eol::{classify, find_from, EndOfLine};
//!
//! let raw = [0x00, 0x0D, 0x0A, 0x00];
//!
//! assert_eq!(classify(&raw, 0).unwrap(), None);
//! assert_eq!(classify(&raw, 1).unwrap(), Some(EndOfLine::Both));
//! assert_eq!(classify(&raw, 2).unwrap(), Some(EndOfLine::LineFeed));
//!
//! assert_eq!(find_from(&raw, 0).unwrap(), Some((1, EndOfLine::Both)));
//! assert_eq!(find_from(&raw, 3).unwrap(), None);
//! ```

use crate::character::{CARRIAGE_RETURN, LINE_FEED};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// End-Of-Line (EOL) mode.
///
/// # Examples
///
/// ```rust
/// use portable_document::EndOfLine;
///
/// assert_eq!(EndOfLine::LineFeed.as_bytes(), b"\n");
/// assert_eq!(EndOfLine::CarriageReturn.as_bytes(), b"\r");
/// assert_eq!(EndOfLine::Both.as_bytes(), b"\r\n");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndOfLine {
    /// A single LINE FEED character (0Ah).
    #[default]
    LineFeed,
    /// A single CARRIAGE RETURN character (0Dh).
    CarriageReturn,
    /// A CARRIAGE RETURN followed immediately by a LINE FEED.
    Both,
}

impl EndOfLine {
    /// Returns the bytes of this marker.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            EndOfLine::LineFeed => &[LINE_FEED],
            EndOfLine::CarriageReturn => &[CARRIAGE_RETURN],
            EndOfLine::Both => &[CARRIAGE_RETURN, LINE_FEED],
        }
    }

    /// Returns the number of bytes of this marker.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(self) -> usize {
        self.as_bytes().len()
    }
}

/// Checks whether `position` in `raw` is the start of an EOL marker.
///
/// Returns `Ok(None)` when the byte at `position` does not start a marker.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] naming `position` if it is not a valid index in `raw`.
pub fn classify(raw: &[u8], position: usize) -> Result<Option<EndOfLine>> {
    let byte = *raw
        .get(position)
        .ok_or_else(|| Error::out_of_range("position", position, raw.len()))?;

    let kind = match byte {
        CARRIAGE_RETURN => match raw.get(position + 1) {
            Some(&LINE_FEED) => EndOfLine::Both,
            _ => EndOfLine::CarriageReturn,
        },
        LINE_FEED => EndOfLine::LineFeed,
        _ => return Ok(None),
    };

    Ok(Some(kind))
}

/// Searches for the first EOL marker at or after `start`.
///
/// The first index where [`classify`] recognizes a marker wins; the search never
/// skips past a marker looking for a longer one.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] naming `start` if it is not a valid index in `raw`.
/// A zero-length buffer has no valid start, so it always fails instead of reporting
/// that no marker was found.
pub fn find_from(raw: &[u8], start: usize) -> Result<Option<(usize, EndOfLine)>> {
    if start >= raw.len() {
        return Err(Error::out_of_range("start", start, raw.len()));
    }

    for position in start..raw.len() {
        if let Some(kind) = classify(raw, position)? {
            return Ok(Some((position, kind)));
        }
    }

    Ok(None)
}

/// The sentinel form of a search result.
///
/// `location` is `-1` when nothing was found, in which case `kind` holds the default
/// value and carries no meaning.
///
/// # Examples
///
/// ```rust
/// use portable_document::{EndOfLine, ScanResult};
///
/// let found = ScanResult::try_from(Some((4, EndOfLine::Both))).unwrap();
/// assert_eq!(found.location, 4);
///
/// let missing = ScanResult::try_from(None).unwrap();
/// assert_eq!(missing.location, -1);
/// assert!(!missing.is_found());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanResult {
    pub location: isize,
    pub kind: EndOfLine,
}

impl ScanResult {
    /// The result of a search that found no marker.
    pub const NOT_FOUND: ScanResult = ScanResult {
        location: -1,
        kind: EndOfLine::LineFeed,
    };

    /// Returns `true` unless this is the not-found sentinel.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.location >= 0
    }

    /// Converts back to the `Option` form, discarding the kind of a sentinel.
    #[must_use]
    pub fn into_option(self) -> Option<(usize, EndOfLine)> {
        usize::try_from(self.location)
            .ok()
            .map(|location| (location, self.kind))
    }
}

impl TryFrom<Option<(usize, EndOfLine)>> for ScanResult {
    type Error = Error;

    /// Fails with [`Error::OutOfRange`] if the location does not fit in an `isize`.
    fn try_from(found: Option<(usize, EndOfLine)>) -> Result<Self> {
        let Some((location, kind)) = found else {
            return Ok(ScanResult::NOT_FOUND);
        };

        let limit = isize::MAX.unsigned_abs() + 1;
        let signed =
            isize::try_from(location).map_err(|_| Error::out_of_range("location", location, limit))?;

        Ok(ScanResult {
            location: signed,
            kind,
        })
    }
}
