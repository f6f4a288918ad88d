//! Common test utilities for building pipeline specifications.
use podflow::prelude::*;
use serde_json::Value;

/// Turns a JSON object literal into step properties; anything else is "no properties".
#[allow(dead_code)]
pub fn props(value: Value) -> Option<Properties> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Builds a specification from `(step, properties)` pairs, keeping their order.
#[allow(dead_code)]
pub fn spec(steps: Vec<(&str, Value)>) -> Specification {
    steps
        .into_iter()
        .map(|(step, value)| (step, props(value)))
        .collect()
}

/// A converter with small, easy-to-check spacing and the built-in schema.
#[allow(dead_code)]
pub fn converter() -> FlowConverter {
    FlowConverter::builder()
        .with_spacing(LayoutSpacing { x: 100, y: 50 })
        .build()
}

/// Converter that rejects non-numeric saved canvas coordinates.
#[allow(dead_code)]
pub fn strict_converter() -> FlowConverter {
    FlowConverter::builder()
        .with_spacing(LayoutSpacing { x: 100, y: 50 })
        .with_canvas_policy(CanvasPolicy::Strict)
        .build()
}

/// Ids of the predecessors of `id`, in insertion order.
#[allow(dead_code)]
pub fn needs_of(graph: &Graph, id: &str) -> Vec<String> {
    graph
        .node(id)
        .map(|n| n.needs.iter().cloned().collect())
        .unwrap_or_default()
}

/// Position of `id` as an `(x, y)` pair.
#[allow(dead_code)]
pub fn xy(graph: &Graph, id: &str) -> (i64, i64) {
    let position = graph.node(id).expect("node should exist").position;
    (
        position.x.expect("x should be set"),
        position.y.expect("y should be set"),
    )
}

/// Index pipeline without a gateway or saved canvas.
#[allow(dead_code)]
pub const INDEX_FLOW: &str = r#"!Flow
with:
  name: demo
  port_expose: 45678
pods:
  encoder:
    uses: encode.yml
    parallel: 2
  indexer:
    uses: index.yml
    read_only: true
  ranker:
    uses: rank.yml
    needs: [encoder, indexer]
"#;

/// Pipeline carrying a saved canvas for some of its steps.
#[allow(dead_code)]
pub const SAVED_CANVAS_FLOW: &str = r#"!Flow
with:
  board:
    canvas:
      gateway:
        x: 40
        y: 60
      crafter:
        x: "320"
        y: "180"
pods:
  gateway:
  crafter:
    uses: craft.yml
  encoder:
    uses: encode.yml
    needs: gateway
"#;
