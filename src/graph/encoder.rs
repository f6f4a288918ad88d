use super::model::{Graph, Node};
use crate::error::GraphError;
use crate::pipeline::{FlowDocument, NEEDS, Needs, Properties, Specification};
use crate::schema::PropertyTypes;
use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use serde_json::{Value, json};
use tracing::debug;

/// Converts an edited graph back into a pipeline document.
///
/// Pods are keyed by node label, in node order; nodes with an empty label are skipped.
/// Each pod's `needs` is rebuilt from the links (a single predecessor is written as a bare
/// name), property values are decoded through `types`, and every labelled node's position
/// is written to `with.board.canvas`, replacing any previous `board` entry.
///
/// Two nodes known by the same name fail with [`GraphError::DuplicateLabel`]. Labelled
/// nodes and link endpoints are checked, since links resolve through
/// [`Node::display_name`]. A link whose endpoint is not a node fails with
/// [`GraphError::DanglingLink`].
pub fn encode_specification(
    graph: &Graph,
    types: &PropertyTypes,
) -> Result<FlowDocument, GraphError> {
    ensure_unique_names(graph)?;
    let needs_by_label = needs_by_label(graph)?;

    let mut pods = Specification::new();
    let mut canvas = serde_json::Map::new();

    for node in graph.nodes.values().filter(|n| !n.label.is_empty()) {
        let mut properties: Properties = node
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), types.decode(key, value)))
            .collect();
        if let Some(predecessors) = needs_by_label.get(node.label.as_str()) {
            properties.insert(
                NEEDS.to_string(),
                Needs::from_names(predecessors.clone()).to_value(),
            );
        }
        pods.insert(node.label.clone(), Some(properties));
        canvas.insert(node.label.clone(), serde_json::to_value(node.position).unwrap_or_default());
    }

    let mut with = graph.with.clone();
    with.insert("board".to_string(), json!({ "canvas": Value::Object(canvas) }));

    debug!(pods = pods.len(), links = graph.links.len(), "Encoded pipeline graph");
    Ok(FlowDocument::new(with, pods))
}

fn ensure_unique_names(graph: &Graph) -> Result<(), GraphError> {
    let endpoints: AHashSet<&str> = graph
        .links
        .values()
        .flat_map(|link| [link.from.node_id.as_str(), link.to.node_id.as_str()])
        .collect();
    let mut owners: AHashMap<&str, &str> = AHashMap::with_capacity(graph.nodes.len());
    let named = graph
        .nodes
        .values()
        .filter(|n| !n.label.is_empty() || endpoints.contains(n.id.as_str()));
    for node in named {
        let name = node.display_name();
        if let Some(first) = owners.insert(name, node.id.as_str()) {
            return Err(GraphError::DuplicateLabel {
                label: name.to_string(),
                first: first.to_string(),
                second: node.id.clone(),
            });
        }
    }
    Ok(())
}

/// Inverts the link set: successor name to the ordered names of its predecessors.
fn needs_by_label(graph: &Graph) -> Result<IndexMap<&str, Vec<String>>, GraphError> {
    let mut needs: IndexMap<&str, Vec<String>> = IndexMap::new();
    for link in graph.links.values() {
        let from = endpoint(graph, &link.id, &link.from.node_id)?;
        let to = endpoint(graph, &link.id, &link.to.node_id)?;
        needs
            .entry(to.display_name())
            .or_default()
            .push(from.display_name().to_string());
    }
    Ok(needs)
}

fn endpoint<'g>(graph: &'g Graph, link: &str, node_id: &str) -> Result<&'g Node, GraphError> {
    graph.node(node_id).ok_or_else(|| GraphError::DanglingLink {
        link: link.to_string(),
        node: node_id.to_string(),
    })
}
