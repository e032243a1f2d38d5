//! # Drawlib Core
//!
//! Core types for the drawlib library panel: drawable elements, library
//! items, catalog snapshots and their display order, the versioned library
//! document, configuration and error types.

pub mod catalog;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod item;
pub mod types;

pub use catalog::{Catalog, OrderedCatalog};
pub use config::PanelConfig;
pub use document::{LibraryDocument, DOCUMENT_TYPE, DOCUMENT_VERSION, LIBRARY_MIME_TYPE};
pub use element::{
    bind_arrow_end, bind_arrow_start, Binding, BoundElement, Element, ElementId, ElementKind,
    GroupId,
};
pub use error::{DocumentError, DocumentResult, LibraryError, LibraryResult};
pub use item::{ItemRef, LibraryItem, LibraryItemId, LibraryItemStatus};
pub use types::{AddToLibraryCallback, DataCallback, InsertCallback};
