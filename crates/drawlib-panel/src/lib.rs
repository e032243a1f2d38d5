//! # Drawlib Panel
//!
//! Multi-select and instancing logic behind a library panel.
//!
//! ## Components
//!
//! - **Selection**: toggle and shift-extended range selection over the
//!   catalog's display order
//! - **Resolver**: decides whether an action targets one item or the whole
//!   selection
//! - **Instancer**: duplicates item elements with fresh ids and remapped
//!   bindings
//! - **Drag payload**: serializes instanced items into a typed, versioned
//!   document for drag export
//! - **Panel**: one panel session wiring the above to host callbacks
//!
//! ## Usage
//!
//! ```rust
//! use drawlib_core::{Catalog, Element, ElementKind, ItemRef, LibraryItem, LibraryItemStatus};
//! use drawlib_panel::{ClickOutcome, LibraryPanel};
//!
//! let mut panel = LibraryPanel::default()
//!     .on_insert(Box::new(|items: Vec<LibraryItem>| assert_eq!(items.len(), 1)));
//! panel.set_catalog(Catalog::new(vec![LibraryItem::new(
//!     "arrow",
//!     LibraryItemStatus::Unpublished,
//!     vec![Element::new("a1", ElementKind::Arrow)],
//! )]));
//!
//! let clicked = ItemRef::from("arrow");
//! assert_eq!(panel.on_item_click(&clicked), ClickOutcome::Inserted { items: 1 });
//! ```

pub mod drag_payload;
pub mod instancer;
pub mod menu_model;
pub mod panel;
pub mod resolver;
pub mod selection;

pub use drag_payload::{DragDataSink, DragPayload, DragPayloadBuilder};
pub use instancer::ElementInstancer;
pub use menu_model::{EmptyLibraryHint, LibraryMenuEntry, LibraryMenuModel};
pub use panel::{ClickOutcome, LibraryPanel};
pub use resolver::{resolve_targets, ResolvedTargets};
pub use selection::{SelectionController, SelectionPhase, SelectionState, Transition};
