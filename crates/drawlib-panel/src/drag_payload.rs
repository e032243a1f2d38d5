//! Drag export of library items.
//!
//! Building a payload is pure: resolve targets, instance them, serialize the
//! result as a [`LibraryDocument`]. Handing the payload to the platform drag
//! session is left to a [`DragDataSink`] at the boundary.

use drawlib_core::{
    Catalog, ItemRef, LibraryDocument, LibraryResult, PanelConfig, LIBRARY_MIME_TYPE,
};

use crate::instancer::ElementInstancer;
use crate::resolver::{resolve_targets, ResolvedTargets};
use crate::selection::SelectionState;

/// Serialized library items ready to attach to a drag session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub content_type: &'static str,
    pub data: String,
}

impl DragPayload {
    /// Parses the attached data back into a validated document.
    pub fn decode(&self) -> LibraryResult<LibraryDocument> {
        LibraryDocument::from_json(&self.data)
    }
}

/// Receives drag payloads, e.g. a browser `DataTransfer` or an OS drag source.
pub trait DragDataSink {
    fn set_data(&mut self, content_type: &str, data: &str);
}

/// Builds self-contained drag payloads from panel state.
#[derive(Debug, Clone)]
pub struct DragPayloadBuilder {
    instancer: ElementInstancer,
    source: String,
    pretty: bool,
}

impl Default for DragPayloadBuilder {
    fn default() -> Self {
        Self::from_config(&PanelConfig::default())
    }
}

impl DragPayloadBuilder {
    pub fn new(instancer: ElementInstancer, source: impl Into<String>) -> Self {
        Self {
            instancer,
            source: source.into(),
            pretty: false,
        }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            instancer: ElementInstancer::from_config(config),
            source: config.payload_source.clone(),
            pretty: config.pretty_payload,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Instancer shared with click insertion.
    pub fn instancer_mut(&mut self) -> &mut ElementInstancer {
        &mut self.instancer
    }

    /// Builds the payload for a drag started on `clicked`.
    ///
    /// Returns `Ok(None)` when there is nothing to export: the pending entry
    /// (its elements are not library items yet) or a stale id that resolves
    /// to no catalog items.
    pub fn build(
        &mut self,
        clicked: &ItemRef,
        selection: &SelectionState,
        catalog: &Catalog,
    ) -> LibraryResult<Option<DragPayload>> {
        let targets = match resolve_targets(clicked, selection, catalog) {
            ResolvedTargets::Pending => {
                tracing::debug!("drag started on pending item, nothing to export");
                return Ok(None);
            }
            ResolvedTargets::Items(items) if items.is_empty() => {
                tracing::debug!(?clicked, "drag target no longer in catalog");
                return Ok(None);
            }
            ResolvedTargets::Items(items) => items,
        };

        let items = self.instancer.instance(&targets);
        let document = LibraryDocument::new(self.source.clone(), items);
        let data = if self.pretty {
            document.to_json_pretty()?
        } else {
            document.to_json()?
        };

        tracing::debug!(
            items = document.item_count(),
            bytes = data.len(),
            "built drag payload"
        );

        Ok(Some(DragPayload {
            content_type: LIBRARY_MIME_TYPE,
            data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawlib_core::{
        bind_arrow_start, Element, ElementKind, LibraryItem, LibraryItemId, LibraryItemStatus,
        DOCUMENT_VERSION,
    };
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        let mut shape = Element::new("shape", ElementKind::Rectangle);
        let mut arrow = Element::new("arrow", ElementKind::Arrow);
        bind_arrow_start(&mut arrow, &mut shape);
        Catalog::new(vec![
            LibraryItem::new("bound", LibraryItemStatus::Unpublished, vec![shape, arrow]),
            LibraryItem::new(
                "single",
                LibraryItemStatus::Published,
                vec![Element::new("dot", ElementKind::Ellipse)],
            ),
        ])
    }

    #[test]
    fn test_payload_is_tagged_and_versioned() {
        let catalog = catalog();
        let mut builder = DragPayloadBuilder::new(ElementInstancer::with_seed(1), "tests");
        let payload = builder
            .build(&"single".into(), &SelectionState::new(), &catalog)
            .unwrap()
            .unwrap();

        assert_eq!(payload.content_type, LIBRARY_MIME_TYPE);
        let doc = payload.decode().unwrap();
        assert_eq!(doc.version, DOCUMENT_VERSION);
        assert_eq!(doc.source, "tests");
        assert_eq!(doc.item_count(), 1);
        assert_ne!(doc.library_items[0].elements[0].id.as_str(), "dot");
    }

    #[test]
    fn test_payload_round_trip_keeps_bindings() {
        let catalog = catalog();
        let selection =
            SelectionState::from_ids(["bound", "single"].into_iter().map(LibraryItemId::from));
        let mut builder = DragPayloadBuilder::default().pretty(true);
        let payload = builder
            .build(&"bound".into(), &selection, &catalog)
            .unwrap()
            .unwrap();
        let doc = payload.decode().unwrap();

        assert_eq!(doc.item_count(), 2);
        assert_eq!(doc.library_items[0].elements.len(), 2);
        assert_eq!(doc.library_items[1].elements.len(), 1);
        for item in &doc.library_items {
            let ids: HashSet<_> = item.elements.iter().map(|e| &e.id).collect();
            for el in &item.elements {
                assert!(el.referenced_ids().iter().all(|r| ids.contains(r)));
            }
        }
    }

    #[test]
    fn test_payload_with_repeated_source_ids_decodes() {
        let catalog = Catalog::new(vec![LibraryItem::new(
            "i",
            LibraryItemStatus::Unpublished,
            vec![
                Element::new("e", ElementKind::Rectangle),
                Element::new("e", ElementKind::Ellipse),
            ],
        )]);
        let mut builder = DragPayloadBuilder::new(ElementInstancer::with_seed(1), "tests");
        let payload = builder
            .build(&"i".into(), &SelectionState::new(), &catalog)
            .unwrap()
            .unwrap();

        let doc = payload.decode().unwrap();
        let els = &doc.library_items[0].elements;
        assert_eq!(els.len(), 2);
        assert_ne!(els[0].id, els[1].id);
    }

    #[test]
    fn test_pending_and_stale_yield_no_payload() {
        let catalog = catalog();
        let mut builder = DragPayloadBuilder::default();
        let selection = SelectionState::new();
        assert!(builder
            .build(&ItemRef::Pending, &selection, &catalog)
            .unwrap()
            .is_none());
        assert!(builder
            .build(&"gone".into(), &selection, &catalog)
            .unwrap()
            .is_none());
    }
}
