//! Versioned library document format.
//!
//! This is the only serialized artifact the panel produces. Drag payloads
//! carry it verbatim, so its shape must stay readable by other versions of
//! the panel:
//!
//! ```json
//! { "type": "drawlib", "version": 2, "source": "drawlib",
//!   "libraryItems": [ { "id": "...", "status": "unpublished",
//!                       "created": "...", "elements": [ ... ] } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DocumentError, DocumentResult, LibraryResult};
use crate::item::LibraryItem;

/// Type tag written at the top of every library document.
pub const DOCUMENT_TYPE: &str = "drawlib";

/// Current schema version of the library document.
pub const DOCUMENT_VERSION: u32 = 2;

/// Content type under which library documents travel in drag sessions.
pub const LIBRARY_MIME_TYPE: &str = "application/vnd.drawlib+json";

/// A self-contained list of library items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u32,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub library_items: Vec<LibraryItem>,
}

impl LibraryDocument {
    /// Create a document at the current schema version.
    pub fn new(source: impl Into<String>, library_items: Vec<LibraryItem>) -> Self {
        Self {
            doc_type: DOCUMENT_TYPE.to_string(),
            version: DOCUMENT_VERSION,
            source: source.into(),
            library_items,
        }
    }

    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a document.
    pub fn from_json(data: &str) -> LibraryResult<Self> {
        let doc: Self = serde_json::from_str(data)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Checks the type tag, the schema version and per-item id uniqueness.
    pub fn validate(&self) -> DocumentResult<()> {
        if self.doc_type != DOCUMENT_TYPE {
            return Err(DocumentError::WrongType {
                expected: DOCUMENT_TYPE.to_string(),
                actual: self.doc_type.clone(),
            });
        }

        if self.version > DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                version: self.version,
                supported: DOCUMENT_VERSION,
            });
        }

        for item in &self.library_items {
            let mut seen = HashSet::new();
            for element in &item.elements {
                if !seen.insert(&element.id) {
                    return Err(DocumentError::DuplicateElementId {
                        item_id: item.id.to_string(),
                        element_id: element.id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.library_items.len()
    }
}
