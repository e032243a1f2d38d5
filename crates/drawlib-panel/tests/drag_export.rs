//! Drag export through a panel session

use chrono::{TimeZone, Utc};
use drawlib_core::{
    bind_arrow_end, bind_arrow_start, Catalog, Element, ElementId, ElementKind, ItemRef,
    LibraryDocument, LibraryItem, LibraryItemStatus, PanelConfig, DOCUMENT_TYPE,
    LIBRARY_MIME_TYPE,
};
use drawlib_panel::{DragDataSink, DragPayloadBuilder, ElementInstancer, LibraryPanel};
use std::collections::HashSet;

#[derive(Default)]
struct DataTransfer {
    entries: Vec<(String, String)>,
}

impl DragDataSink for DataTransfer {
    fn set_data(&mut self, content_type: &str, data: &str) {
        self.entries.push((content_type.to_string(), data.to_string()));
    }
}

fn flowchart() -> LibraryItem {
    let mut start = Element::new("start", ElementKind::Ellipse).with_bounds(0.0, 0.0, 40.0, 20.0);
    let mut end = Element::new("end", ElementKind::Diamond).with_bounds(100.0, 0.0, 40.0, 40.0);
    let mut arrow = Element::new("flow", ElementKind::Arrow);
    bind_arrow_start(&mut arrow, &mut start);
    bind_arrow_end(&mut arrow, &mut end);
    let mut label = Element::new("caption", ElementKind::Text);
    label.container_id = Some(end.id.clone());
    label
        .extra
        .insert("text".to_string(), serde_json::Value::from("done?"));

    let mut item = LibraryItem::new(
        "flowchart",
        LibraryItemStatus::Unpublished,
        vec![start, end, arrow, label],
    )
    .with_name("Flowchart");
    item.created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    item
}

fn panel() -> LibraryPanel {
    let builder = DragPayloadBuilder::new(ElementInstancer::with_seed(11), "integration");
    let mut panel = LibraryPanel::with_payload_builder(builder);
    panel.set_catalog(Catalog::new(vec![
        flowchart(),
        LibraryItem::new(
            "star",
            LibraryItemStatus::Published,
            vec![Element::new("star-1", ElementKind::Freedraw)],
        ),
        LibraryItem::new(
            "note",
            LibraryItemStatus::Unpublished,
            vec![Element::new("note-1", ElementKind::Text)],
        ),
    ]));
    panel
}

fn decode(sink: &DataTransfer) -> LibraryDocument {
    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].0, LIBRARY_MIME_TYPE);
    LibraryDocument::from_json(&sink.entries[0].1).unwrap()
}

#[test]
fn test_drag_of_selection_exports_every_selected_item() {
    let mut panel = panel();
    panel.on_item_select_toggle(&ItemRef::from("flowchart"), false);
    panel.on_item_select_toggle(&ItemRef::from("star"), true);
    assert_eq!(panel.selection().len(), 3);

    let mut sink = DataTransfer::default();
    assert!(panel
        .on_item_drag(&ItemRef::from("note"), &mut sink)
        .unwrap());
    let doc = decode(&sink);

    assert_eq!(doc.doc_type, DOCUMENT_TYPE);
    assert_eq!(doc.source, "integration");
    assert_eq!(doc.item_count(), 3);
    let counts: Vec<usize> = doc.library_items.iter().map(|i| i.elements.len()).collect();
    assert_eq!(counts, [4, 1, 1]);
}

#[test]
fn test_drag_of_unselected_item_exports_it_alone() {
    let mut panel = panel();
    panel.on_item_select_toggle(&ItemRef::from("note"), false);

    let mut sink = DataTransfer::default();
    panel
        .on_item_drag(&ItemRef::from("star"), &mut sink)
        .unwrap();
    let doc = decode(&sink);
    assert_eq!(doc.item_count(), 1);
    assert_eq!(doc.library_items[0].id.as_str(), "star");
}

#[test]
fn test_exported_item_keeps_metadata_and_internal_bindings() {
    let mut panel = panel();
    let mut sink = DataTransfer::default();
    panel
        .on_item_drag(&ItemRef::from("flowchart"), &mut sink)
        .unwrap();
    let doc = decode(&sink);
    let item = &doc.library_items[0];
    let source = flowchart();

    assert_eq!(item.name.as_deref(), Some("Flowchart"));
    assert_eq!(item.created, source.created);
    assert_eq!(item.status, LibraryItemStatus::Unpublished);

    let ids: HashSet<_> = item.elements.iter().map(|e| &e.id).collect();
    let source_ids: HashSet<_> = source.elements.iter().map(|e| &e.id).collect();
    assert!(ids.is_disjoint(&source_ids));

    let (start, end, arrow, label) = (
        &item.elements[0],
        &item.elements[1],
        &item.elements[2],
        &item.elements[3],
    );
    assert_eq!(arrow.start_binding.as_ref().unwrap().element_id, start.id);
    assert_eq!(arrow.end_binding.as_ref().unwrap().element_id, end.id);
    assert_eq!(label.container_id.as_ref(), Some(&end.id));
    assert_eq!(label.extra["text"], "done?");
}

#[test]
fn test_two_drags_never_share_element_ids() {
    let mut panel = panel();
    let mut first = DataTransfer::default();
    let mut second = DataTransfer::default();
    panel
        .on_item_drag(&ItemRef::from("flowchart"), &mut first)
        .unwrap();
    panel
        .on_item_drag(&ItemRef::from("flowchart"), &mut second)
        .unwrap();

    let first = decode(&first);
    let second = decode(&second);
    let element_ids = |doc: &LibraryDocument| -> HashSet<ElementId> {
        doc.library_items[0]
            .elements
            .iter()
            .map(|e| e.id.clone())
            .collect()
    };
    let (first_ids, second_ids) = (element_ids(&first), element_ids(&second));
    assert!(first_ids.is_disjoint(&second_ids));
}

#[test]
fn test_pending_and_stale_drags_leave_sink_untouched() {
    let mut panel = panel();
    panel.set_pending_elements(vec![Element::new("draft", ElementKind::Rectangle)]);
    let mut sink = DataTransfer::default();

    assert!(!panel.on_item_drag(&ItemRef::Pending, &mut sink).unwrap());
    assert!(!panel
        .on_item_drag(&ItemRef::from("deleted"), &mut sink)
        .unwrap());
    assert!(sink.entries.is_empty());
}

#[test]
fn test_pretty_payload_from_config() {
    let config = PanelConfig {
        pretty_payload: true,
        payload_source: "desktop".to_string(),
        ..PanelConfig::default()
    };
    let mut panel = LibraryPanel::new(&config);
    panel.set_catalog(Catalog::new(vec![flowchart()]));

    let mut sink = DataTransfer::default();
    panel
        .on_item_drag(&ItemRef::from("flowchart"), &mut sink)
        .unwrap();
    assert!(sink.entries[0].1.contains('\n'));
    assert_eq!(decode(&sink).source, "desktop");
}
