//! Elements that make up a document.
//!
//! Each element knows how to emit its own syntax through a [`SyntaxWriter`]; it
//! never touches the output directly.

mod file_header;
mod name;

pub use file_header::{DocumentType, FileHeader, BINARY_MARKER};
pub use name::Name;

use crate::{Result, SyntaxWriter};

/// An item used to construct the document.
pub trait DocumentElement {
    /// Generates the document syntax for this element.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by `writer`.
    fn write(&self, writer: &mut dyn SyntaxWriter) -> Result<()>;
}

/// An object in the document.
pub trait Object: DocumentElement {}
