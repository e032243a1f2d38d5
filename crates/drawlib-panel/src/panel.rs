//! Library panel session.
//!
//! Wires pointer events to the selection, the resolver and the instancer, and
//! hands results to the host through callbacks and a drag sink.
//!
//! ```text
//! click ─────────┬─> SelectionController      (select toggle)
//!                └─> resolve ─> instance ─> on_insert / on_add_to_library
//! drag-start ──────> DragPayloadBuilder ───> DragDataSink
//! ```

use drawlib_core::{
    AddToLibraryCallback, Catalog, Element, InsertCallback, ItemRef, LibraryItem, LibraryItemId,
    LibraryResult, PanelConfig,
};

use crate::drag_payload::{DragDataSink, DragPayloadBuilder};
use crate::menu_model::LibraryMenuModel;
use crate::resolver::{resolve_targets, ResolvedTargets};
use crate::selection::{SelectionController, SelectionState, Transition};

/// What a click on a library entry did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Pending elements were handed to the add-to-library callback.
    AddedToLibrary { elements: usize },
    /// Instanced items were handed to the insert callback.
    Inserted { items: usize },
    /// Nothing to act on (stale id, empty pending set, or no callback).
    Ignored,
}

/// State of one open library panel.
///
/// The catalog and pending elements are snapshots owned upstream; the panel
/// only reads them. The selection lives as long as the session.
pub struct LibraryPanel {
    catalog: Catalog,
    pending_elements: Vec<Element>,
    selection: SelectionController,
    payloads: DragPayloadBuilder,
    on_insert: Option<InsertCallback>,
    on_add_to_library: Option<AddToLibraryCallback>,
}

impl Default for LibraryPanel {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

impl LibraryPanel {
    pub fn new(config: &PanelConfig) -> Self {
        Self::with_payload_builder(DragPayloadBuilder::from_config(config))
    }

    pub fn with_payload_builder(payloads: DragPayloadBuilder) -> Self {
        Self {
            catalog: Catalog::default(),
            pending_elements: Vec::new(),
            selection: SelectionController::new(),
            payloads,
            on_insert: None,
            on_add_to_library: None,
        }
    }

    pub fn on_insert(mut self, callback: InsertCallback) -> Self {
        self.on_insert = Some(callback);
        self
    }

    pub fn on_add_to_library(mut self, callback: AddToLibraryCallback) -> Self {
        self.on_add_to_library = Some(callback);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the catalog snapshot. Selected ids that vanished stay in the
    /// selection and are skipped when resolving targets.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn pending_elements(&self) -> &[Element] {
        &self.pending_elements
    }

    pub fn set_pending_elements(&mut self, elements: Vec<Element>) {
        self.pending_elements = elements;
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Selected ids in display order.
    pub fn selected_items(&self) -> Vec<LibraryItemId> {
        self.selection
            .state()
            .ordered_ids(&self.catalog.display_order())
    }

    /// External replace of the selection (header menu, bulk delete).
    pub fn set_selected_items(&mut self, ids: impl IntoIterator<Item = LibraryItemId>) {
        self.selection.replace(ids);
    }

    /// Resets the session selection, e.g. when the panel closes.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_item_selected(&self, item: &ItemRef) -> bool {
        self.selection.is_selected(item)
    }

    pub fn on_item_select_toggle(
        &mut self,
        item: &ItemRef,
        range_modifier: bool,
    ) -> Option<Transition> {
        let order = self.catalog.display_order();
        self.selection.toggle(item, range_modifier, &order)
    }

    /// Instanced copies of the items an action on `item` targets.
    ///
    /// Empty for the pending entry and for stale ids.
    pub fn inserted_items(&mut self, item: &ItemRef) -> Vec<LibraryItem> {
        match resolve_targets(item, self.selection.state(), &self.catalog) {
            ResolvedTargets::Pending => Vec::new(),
            ResolvedTargets::Items(items) => self.payloads.instancer_mut().instance(&items),
        }
    }

    pub fn on_item_click(&mut self, item: &ItemRef) -> ClickOutcome {
        if item.is_pending() {
            if self.pending_elements.is_empty() {
                return ClickOutcome::Ignored;
            }
            let Some(callback) = &self.on_add_to_library else {
                return ClickOutcome::Ignored;
            };
            let elements = self.pending_elements.len();
            callback(self.pending_elements.clone());
            return ClickOutcome::AddedToLibrary { elements };
        }

        let items = self.inserted_items(item);
        if items.is_empty() {
            tracing::debug!(?item, "click resolved to no library items");
            return ClickOutcome::Ignored;
        }
        let Some(callback) = &self.on_insert else {
            return ClickOutcome::Ignored;
        };
        let count = items.len();
        callback(items);
        ClickOutcome::Inserted { items: count }
    }

    /// Attaches a drag payload for `item` to `sink`.
    ///
    /// Returns whether anything was attached.
    pub fn on_item_drag(
        &mut self,
        item: &ItemRef,
        sink: &mut dyn DragDataSink,
    ) -> LibraryResult<bool> {
        let payload = self
            .payloads
            .build(item, self.selection.state(), &self.catalog)?;
        match payload {
            Some(payload) => {
                sink.set_data(payload.content_type, &payload.data);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn menu_model(&self) -> LibraryMenuModel {
        LibraryMenuModel::build(&self.catalog, &self.pending_elements, self.selection.state())
    }
}
