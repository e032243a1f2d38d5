use drawlib_core::{ItemRef, LibraryItemId, OrderedCatalog};
use std::collections::HashSet;

/// Selected library items plus the anchor used for shift-click ranges.
///
/// # Selection Model
///
/// - **Selected set**: ids of saved library items; never the pending entry
/// - **Anchor**: the item most recently added by a click, one endpoint of
///   the next range selection. Deselecting anything clears it.
///
/// Transitions are pure: [`SelectionState::toggle`] returns the next state
/// and leaves `self` untouched. [`SelectionController`] wraps a state for
/// callers that want to mutate in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashSet<LibraryItemId>,
    anchor: Option<LibraryItemId>,
}

/// Coarse state of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    Selecting,
}

/// Which branch a toggle took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The item was selected and has been removed; the anchor is cleared.
    Deselected,
    /// The item was added on its own.
    Added,
    /// The range between the anchor and the item was merged into the selection.
    RangeExtended { added: usize },
    /// A range was requested but the anchor or the item is missing from the
    /// display order, so only the item was added.
    RangeFallback,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from externally supplied ids, without an anchor.
    pub fn from_ids(ids: impl IntoIterator<Item = LibraryItemId>) -> Self {
        Self {
            selected: ids.into_iter().collect(),
            anchor: None,
        }
    }

    pub fn selected(&self) -> &HashSet<LibraryItemId> {
        &self.selected
    }

    pub fn anchor(&self) -> Option<&LibraryItemId> {
        self.anchor.as_ref()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.selected.is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::Selecting
        }
    }

    pub fn contains(&self, id: &LibraryItemId) -> bool {
        self.selected.contains(id)
    }

    /// Returns `false` for the pending entry, set membership otherwise.
    pub fn is_selected(&self, item: &ItemRef) -> bool {
        item.item_id().is_some_and(|id| self.contains(id))
    }

    /// Computes the selection after a click on `id`.
    ///
    /// - selected item: removed, anchor cleared
    /// - unselected item without range modifier, or without an anchor: added
    ///   and becomes the anchor
    /// - unselected item with range modifier and an anchor: every item between
    ///   the anchor and `id` in `order` (inclusive) is merged into the
    ///   selection, and `id` becomes the anchor. If either endpoint is not in
    ///   `order`, only `id` is added.
    pub fn toggle(
        &self,
        id: &LibraryItemId,
        range_modifier: bool,
        order: &OrderedCatalog<'_>,
    ) -> (SelectionState, Transition) {
        let mut next = self.clone();

        if next.selected.remove(id) {
            next.anchor = None;
            return (next, Transition::Deselected);
        }

        let transition = match (&self.anchor, range_modifier) {
            (Some(anchor), true) => match (order.index_of(anchor), order.index_of(id)) {
                (Some(anchor_idx), Some(target_idx)) => {
                    let lo = anchor_idx.min(target_idx);
                    let hi = anchor_idx.max(target_idx);
                    let before = next.selected.len();
                    next.selected.extend(order.ids_in_range(lo, hi).cloned());
                    Transition::RangeExtended {
                        added: next.selected.len() - before,
                    }
                }
                _ => {
                    next.selected.insert(id.clone());
                    Transition::RangeFallback
                }
            },
            _ => {
                next.selected.insert(id.clone());
                Transition::Added
            }
        };

        next.anchor = Some(id.clone());
        (next, transition)
    }

    /// Selected ids in display order. Ids missing from `order` are skipped.
    pub fn ordered_ids(&self, order: &OrderedCatalog<'_>) -> Vec<LibraryItemId> {
        order
            .ids()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }
}

/// Owns the selection of one panel session.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_selected(&self, item: &ItemRef) -> bool {
        self.state.is_selected(item)
    }

    /// Applies a click on `item`. Clicks on the pending entry are ignored.
    pub fn toggle(
        &mut self,
        item: &ItemRef,
        range_modifier: bool,
        order: &OrderedCatalog<'_>,
    ) -> Option<Transition> {
        let Some(id) = item.item_id() else {
            tracing::debug!("ignoring selection toggle on pending item");
            return None;
        };

        let (next, transition) = self.state.toggle(id, range_modifier, order);
        match transition {
            Transition::RangeFallback => tracing::warn!(
                item = %id,
                anchor = ?self.state.anchor,
                "range endpoint missing from display order, selecting item alone"
            ),
            _ => tracing::debug!(
                item = %id,
                ?transition,
                selected = next.len(),
                "selection toggled"
            ),
        }
        self.state = next;
        Some(transition)
    }

    /// Replaces the selection from outside the panel (select all, bulk
    /// delete, panel reset). The anchor is always cleared.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = LibraryItemId>) {
        self.state = SelectionState::from_ids(ids);
        tracing::debug!(selected = self.state.len(), "selection replaced");
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::new();
    }
}
