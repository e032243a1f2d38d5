//! View model for the library menu.
//!
//! The rendering layer draws exactly what this model describes; it holds no
//! selection or catalog logic of its own.

use drawlib_core::{Catalog, Element, ItemRef, LibraryItem};

use crate::selection::SelectionState;

/// One tile in a library section.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryMenuEntry {
    pub item: ItemRef,
    pub name: Option<String>,
    pub element_count: usize,
    pub selected: bool,
}

impl LibraryMenuEntry {
    fn from_item(item: &LibraryItem, selection: &SelectionState) -> Self {
        Self {
            item: ItemRef::Item(item.id.clone()),
            name: item.name.clone(),
            element_count: item.elements.len(),
            selected: selection.contains(&item.id),
        }
    }

    fn pending(elements: &[Element]) -> Self {
        Self {
            item: ItemRef::Pending,
            name: None,
            element_count: elements.len(),
            selected: false,
        }
    }
}

/// Hint shown when the personal section has nothing in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyLibraryHint {
    /// Published items exist, only the personal library is empty.
    PrivateLibrary,
    /// Nothing at all in the library.
    Library,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryMenuModel {
    /// Pending entry (if any) followed by unpublished items.
    pub personal: Vec<LibraryMenuEntry>,
    pub published: Vec<LibraryMenuEntry>,
    pub is_library_empty: bool,
    /// Section headers and the selection dropdown in the heading.
    pub show_headers: bool,
    /// Import/export buttons shown in place of an empty library.
    pub show_control_buttons: bool,
    pub personal_empty_hint: Option<EmptyLibraryHint>,
    /// "No items" placeholder under the published header.
    pub show_published_placeholder: bool,
    /// Selected items still in the catalog.
    pub selected_count: usize,
}

impl LibraryMenuModel {
    pub fn build(catalog: &Catalog, pending: &[Element], selection: &SelectionState) -> Self {
        let mut personal = Vec::new();
        if !pending.is_empty() {
            personal.push(LibraryMenuEntry::pending(pending));
        }
        personal.extend(
            catalog
                .unpublished()
                .map(|item| LibraryMenuEntry::from_item(item, selection)),
        );

        let published: Vec<LibraryMenuEntry> = catalog
            .published()
            .map(|item| LibraryMenuEntry::from_item(item, selection))
            .collect();

        let is_library_empty = personal.is_empty() && published.is_empty();
        let personal_empty_hint = personal.is_empty().then(|| {
            if published.is_empty() {
                EmptyLibraryHint::Library
            } else {
                EmptyLibraryHint::PrivateLibrary
            }
        });
        let show_published_placeholder = published.is_empty() && catalog.unpublished().count() > 0;

        Self {
            show_headers: !is_library_empty,
            show_control_buttons: is_library_empty,
            personal_empty_hint,
            show_published_placeholder,
            selected_count: selection.ordered_ids(&catalog.display_order()).len(),
            is_library_empty,
            personal,
            published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawlib_core::{ElementKind, LibraryItemId, LibraryItemStatus};

    fn item(id: &str, status: LibraryItemStatus) -> LibraryItem {
        LibraryItem::new(id, status, vec![Element::new(format!("{id}-el"), ElementKind::Line)])
    }

    #[test]
    fn test_empty_library() {
        let model = LibraryMenuModel::build(&Catalog::default(), &[], &SelectionState::new());
        assert!(model.is_library_empty);
        assert!(model.show_control_buttons);
        assert!(!model.show_headers);
        assert_eq!(model.personal_empty_hint, Some(EmptyLibraryHint::Library));
        assert!(!model.show_published_placeholder);
    }

    #[test]
    fn test_pending_entry_leads_personal_section() {
        let catalog = Catalog::new(vec![item("u", LibraryItemStatus::Unpublished)]);
        let pending = vec![Element::new("p", ElementKind::Rectangle)];
        let model = LibraryMenuModel::build(&catalog, &pending, &SelectionState::new());

        assert_eq!(model.personal.len(), 2);
        assert_eq!(model.personal[0].item, ItemRef::Pending);
        assert_eq!(model.personal[1].item, ItemRef::from("u"));
        assert!(model.show_published_placeholder);
        assert!(!model.show_control_buttons);
    }

    #[test]
    fn test_only_published_items() {
        let catalog = Catalog::new(vec![item("p", LibraryItemStatus::Published)]);
        let selection = SelectionState::from_ids([LibraryItemId::from("p")]);
        let model = LibraryMenuModel::build(&catalog, &[], &selection);

        assert_eq!(
            model.personal_empty_hint,
            Some(EmptyLibraryHint::PrivateLibrary)
        );
        assert!(model.published[0].selected);
        assert_eq!(model.selected_count, 1);
        assert!(model.show_headers);
    }

    #[test]
    fn test_selected_count_skips_deleted_items() {
        let catalog = Catalog::new(vec![item("kept", LibraryItemStatus::Unpublished)]);
        let selection = SelectionState::from_ids(["kept", "deleted"].map(LibraryItemId::from));
        let model = LibraryMenuModel::build(&catalog, &[], &selection);

        assert_eq!(selection.len(), 2);
        assert_eq!(model.selected_count, 1);
        assert!(model.personal[0].selected);
    }
}
