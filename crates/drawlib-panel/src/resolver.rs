//! Decides which library items a click or drag acts on.

use drawlib_core::{Catalog, ItemRef, LibraryItem};

use crate::selection::SelectionState;

/// Items targeted by a user action.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTargets<'a> {
    /// The pending entry was clicked: act on the caller's unsaved elements.
    Pending,
    /// Catalog items in catalog order. May be empty for stale clicks.
    Items(Vec<&'a LibraryItem>),
}

impl<'a> ResolvedTargets<'a> {
    pub fn items(&self) -> &[&'a LibraryItem] {
        match self {
            Self::Pending => &[],
            Self::Items(items) => items,
        }
    }

    /// True when there is nothing in the catalog to act on.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Items(items) if items.is_empty())
    }
}

/// Resolves the targets of an action on `clicked`.
///
/// Clicking a selected item acts on the whole selection; clicking an
/// unselected item acts on that item alone, whatever else is selected. Ids
/// that are no longer in the catalog simply drop out of the result.
pub fn resolve_targets<'a>(
    clicked: &ItemRef,
    selection: &SelectionState,
    catalog: &'a Catalog,
) -> ResolvedTargets<'a> {
    let Some(id) = clicked.item_id() else {
        return ResolvedTargets::Pending;
    };

    let items: Vec<&LibraryItem> = if selection.contains(id) {
        catalog
            .items()
            .iter()
            .filter(|item| selection.contains(&item.id))
            .collect()
    } else {
        catalog.items().iter().filter(|item| &item.id == id).collect()
    };

    tracing::debug!(
        clicked = %id,
        batch = selection.contains(id),
        targets = items.len(),
        "resolved library targets"
    );

    ResolvedTargets::Items(items)
}
