//! Catalog snapshots and the display order used for range selection.

use crate::item::{LibraryItem, LibraryItemId};

/// Read-only snapshot of the user's library.
///
/// The catalog is owned and mutated by the library-management layer; the
/// panel only ever receives fresh snapshots of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<LibraryItem>,
}

impl Catalog {
    pub fn new(items: Vec<LibraryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &LibraryItemId) -> Option<&LibraryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &LibraryItemId) -> bool {
        self.get(id).is_some()
    }

    /// Items not yet published, in catalog order.
    pub fn unpublished(&self) -> impl Iterator<Item = &LibraryItem> {
        self.items.iter().filter(|item| !item.is_published())
    }

    /// Published items, in catalog order.
    pub fn published(&self) -> impl Iterator<Item = &LibraryItem> {
        self.items.iter().filter(|item| item.is_published())
    }

    pub fn display_order(&self) -> OrderedCatalog<'_> {
        OrderedCatalog::new(self)
    }
}

impl From<Vec<LibraryItem>> for Catalog {
    fn from(items: Vec<LibraryItem>) -> Self {
        Self::new(items)
    }
}

/// A catalog viewed in display order: unpublished items first, then
/// published items, each group keeping its relative catalog order.
///
/// This order is the coordinate space of shift-click range selection. It is
/// derived from the snapshot on every construction, so two orders built from
/// equal catalogs are always identical.
#[derive(Debug, Clone)]
pub struct OrderedCatalog<'a> {
    items: Vec<&'a LibraryItem>,
}

impl<'a> OrderedCatalog<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let items = catalog
            .unpublished()
            .chain(catalog.published())
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[&'a LibraryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of `id` in display order.
    pub fn index_of(&self, id: &LibraryItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Ids of the items at positions `lo..=hi`, clamped to the order's length.
    pub fn ids_in_range(
        &self,
        lo: usize,
        hi: usize,
    ) -> impl Iterator<Item = &'a LibraryItemId> + '_ {
        self.items
            .iter()
            .copied()
            .enumerate()
            .filter(move |(idx, _)| *idx >= lo && *idx <= hi)
            .map(|(_, item)| &item.id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a LibraryItemId> + '_ {
        self.items.iter().copied().map(|item| &item.id)
    }
}
