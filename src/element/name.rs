use super::{DocumentElement, Object};
use crate::{Error, Result, SyntaxWriter};
use std::str::FromStr;

/// A name object.
///
/// The identifier is a byte sequence that never contains a zero byte.
///
/// # Examples
///
/// ```rust
/// use portable_document::element::Name;
///
/// let name: Name = "Type".parse().unwrap();
/// assert_eq!(name.id(), b"Type");
///
/// assert!(Name::new(vec![b'A', 0x00]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    id: Vec<u8>,
}

impl Name {
    /// Creates a name from its raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `id` contains a zero byte.
    pub fn new(id: impl Into<Vec<u8>>) -> Result<Self> {
        let id = id.into();
        if id.contains(&0) {
            return Err(Error::invalid_argument(
                "id",
                "the value contains one or more zero bytes",
            ));
        }
        Ok(Name { id })
    }

    pub fn id(&self) -> &[u8] {
        &self.id
    }
}

impl FromStr for Name {
    type Err = Error;

    /// Uses the UTF-8 encoding of `s` as the identifier.
    fn from_str(s: &str) -> Result<Self> {
        Name::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Name {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl DocumentElement for Name {
    fn write(&self, writer: &mut dyn SyntaxWriter) -> Result<()> {
        writer.write_name(&self.id)
    }
}

impl Object for Name {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::testing::Recorder;

    #[test]
    fn test_rejects_zero_byte() {
        let err = Name::new(vec![0x41, 0x00, 0x42]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { argument: "id", .. }));
        assert!("A\0B".parse::<Name>().is_err());
    }

    #[test]
    fn test_utf8_identifier() {
        let name = Name::try_from("café").unwrap();
        assert_eq!(name.id(), "café".as_bytes());
    }

    #[test]
    fn test_write_passes_identifier() {
        let mut recorder = Recorder::default();
        Name::new(b"Font".to_vec())
            .unwrap()
            .write(&mut recorder)
            .unwrap();
        assert_eq!(recorder.names, vec![b"Font".to_vec()]);
        assert!(recorder.comments.is_empty());
    }
}
