use super::DocumentElement;
use crate::{Result, SyntaxWriter};
use serde::{Deserialize, Serialize};

/// Bytes put inside the comment that immediately follows the header line to mark
/// the document as binary.
pub const BINARY_MARKER: [u8; 4] = [0x80; 4];

/// The type of document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// The document is in a binary format.
    Binary,
    /// The document is in a text format.
    Text,
}

/// The file header, e.g. `%PDF-1.7`.
///
/// # Examples
///
/// ```rust
/// use portable_document::element::{DocumentElement, DocumentType, FileHeader};
/// use portable_document::Writer;
///
/// let header = FileHeader::new(1, 7, DocumentType::Text);
/// let mut writer = Writer::new(Vec::new());
/// header.write(&mut writer).unwrap();
///
/// assert_eq!(writer.into_inner(), b"%PDF-1.7\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHeader {
    major: u32,
    minor: u32,
    document_type: DocumentType,
}

impl FileHeader {
    #[must_use]
    pub const fn new(major: u32, minor: u32, document_type: DocumentType) -> Self {
        FileHeader {
            major,
            minor,
            document_type,
        }
    }

    pub const fn major_version(&self) -> u32 {
        self.major
    }

    pub const fn minor_version(&self) -> u32 {
        self.minor
    }

    pub const fn document_type(&self) -> DocumentType {
        self.document_type
    }
}

impl DocumentElement for FileHeader {
    fn write(&self, writer: &mut dyn SyntaxWriter) -> Result<()> {
        writer.write_comment_str(&format!("PDF-{}.{}", self.major, self.minor))?;

        if self.document_type == DocumentType::Binary {
            writer.write_comment(&BINARY_MARKER)?;
        }

        Ok(())
    }
}
