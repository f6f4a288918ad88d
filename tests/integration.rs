//! Integration tests for Podflow
//!
//! End-to-end tests that go from pipeline text to graph and back.
//!
mod common;
use common::*;
use podflow::prelude::*;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn edges(graph: &Graph) -> BTreeSet<(String, String)> {
    graph
        .links
        .values()
        .map(|l| (l.from.node_id.clone(), l.to.node_id.clone()))
        .collect()
}

fn without_needs(properties: &Option<Properties>) -> Properties {
    let mut properties = properties.clone().unwrap_or_default();
    properties.shift_remove("needs");
    properties
}

#[test]
fn test_round_trip_preserves_steps_edges_and_properties() {
    let converter = converter();
    let original = FlowDocument::from_text(INDEX_FLOW).expect("Failed to parse fixture");

    let graph = converter.import_document(&original).expect("Failed to build graph");
    let exported = converter.export_text(&graph).expect("Failed to export graph");
    let reparsed = FlowDocument::from_text(&exported).expect("Failed to parse exported text");

    let steps: Vec<&str> = reparsed.pods.steps().collect();
    assert_eq!(steps, vec!["gateway", "encoder", "indexer", "ranker"]);

    for (step, properties) in &original.pods {
        assert_eq!(
            without_needs(reparsed.pods.get(step).unwrap()),
            without_needs(properties),
            "properties of '{}' changed",
            step
        );
    }

    let regraph = converter
        .import_document(&reparsed)
        .expect("Failed to rebuild graph");
    assert_eq!(edges(&regraph), edges(&graph));
    assert_eq!(
        edges(&graph),
        BTreeSet::from([
            ("gateway".to_string(), "encoder".to_string()),
            ("encoder".to_string(), "indexer".to_string()),
            ("encoder".to_string(), "ranker".to_string()),
            ("indexer".to_string(), "ranker".to_string()),
        ])
    );
}

#[test]
fn test_exported_text_carries_tag_metadata_and_canvas() {
    let converter = converter();
    let graph = converter.import_text(INDEX_FLOW).unwrap();
    let exported = converter.export_text(&graph).unwrap();

    assert!(exported.starts_with("!Flow\n"));

    let reparsed = FlowDocument::from_text(&exported).unwrap();
    assert_eq!(reparsed.with["name"], serde_json::json!("demo"));
    assert_eq!(reparsed.with["port_expose"], serde_json::json!(45678));

    let canvas = reparsed.saved_canvas().unwrap().expect("canvas should be saved");
    assert_eq!(canvas.len(), 4);
    assert_eq!(canvas["ranker"], SavedPosition::new(100, 200));
    assert_eq!(
        reparsed.pods.get("indexer").cloned().flatten().unwrap()["read_only"],
        serde_json::json!(true)
    );
}

#[test]
fn test_export_is_idempotent() {
    let converter = converter();
    let graph = converter.import_text(SAVED_CANVAS_FLOW).unwrap();

    let first = converter.export_text(&graph).unwrap();
    let second = converter.export_text(&graph).unwrap();
    assert_eq!(first, second);

    let regraph = converter.import_text(&first).unwrap();
    let third = converter.export_text(&regraph).unwrap();
    assert_eq!(first, third);

    let again = converter.import_text(SAVED_CANVAS_FLOW).unwrap();
    assert_eq!(converter.export_text(&again).unwrap(), first);
}

#[test]
fn test_saved_canvas_from_document_is_applied() {
    let converter = converter();
    let graph = converter.import_text(SAVED_CANVAS_FLOW).unwrap();

    assert_eq!(xy(&graph, "gateway"), (40, 60));
    assert_eq!(xy(&graph, "crafter"), (320, 180));
    // encoder has no saved position: second node at depth 1.
    assert_eq!(graph.node("encoder").unwrap().depth, Some(1));
    assert_eq!(xy(&graph, "encoder"), (200, 100));
    assert_eq!(graph.with["board"]["canvas"]["gateway"]["x"], serde_json::json!(40));
}

#[test]
fn test_moved_node_position_is_exported() {
    let converter = converter();
    let mut graph = converter.import_text(SAVED_CANVAS_FLOW).unwrap();
    graph.node_mut("encoder").unwrap().position = Position::at(512, 256);

    let exported = converter.export_text(&graph).unwrap();
    let regraph = converter.import_text(&exported).unwrap();

    assert_eq!(xy(&regraph, "encoder"), (512, 256));
}

#[test]
fn test_import_without_tag_or_pods() {
    let converter = converter();

    let graph = converter.import_text("pods:\n  solo:\n").unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(needs_of(&graph, "solo"), vec!["gateway"]);

    let empty = converter.import_text("!Flow\n").unwrap();
    assert_eq!(empty.nodes.len(), 1);
    assert!(empty.node(GATEWAY).is_some());
}

#[test]
fn test_malformed_documents_are_reported() {
    let converter = converter();

    let err = converter.import_text("!Flow\npods: [1, 2\n").unwrap_err();
    assert!(matches!(err, FlowError::Document(DocumentError::Parse(_))));

    let err = converter
        .import_text("with:\n  board:\n    canvas: [1, 2]\npods:\n  a:\n")
        .unwrap_err();
    assert!(matches!(err, FlowError::Document(DocumentError::InvalidCanvas(_))));

    let err = converter
        .import_text("pods:\n  a:\n    needs: b\n  b:\n    needs: a\n")
        .unwrap_err();
    assert!(matches!(
        err,
        FlowError::Graph(GraphError::CyclicDependency { .. })
    ));
}
