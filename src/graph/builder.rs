use super::depth::compute_depths;
use super::layout::apply_layered_layout;
use super::model::{Graph, Link, Node, Position};
use crate::config::{CanvasPolicy, LayoutOptions};
use crate::error::GraphError;
use crate::pipeline::{GATEWAY, NEEDS, Needs, Properties, SavedCanvas, SavedPosition, Specification};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Builds the positioned graph of a specification.
///
/// - A missing `gateway` step is synthesized, without properties, ahead of every other step.
/// - A step other than `gateway` that declares no `needs` depends on the step right
///   before it, so an unannotated pipeline reads top to bottom as a chain.
/// - One link is created per distinct (predecessor, step) pair.
/// - Saved canvas coordinates are applied as-is; every node without a usable x is then
///   placed by the layered layout. Each node gets its depth either way.
///
/// Predecessors that name no step and cyclic `needs` are reported before any layout is done.
pub fn build_graph(
    spec: &Specification,
    canvas: Option<&SavedCanvas>,
    options: &LayoutOptions,
) -> Result<Graph, GraphError> {
    let synthesized = (!spec.contains(GATEWAY)).then_some((GATEWAY, None::<&Properties>));
    let steps = synthesized.into_iter().chain(
        spec.iter()
            .map(|(step, properties)| (step.as_str(), properties.as_ref())),
    );

    let mut nodes: IndexMap<String, Node> = IndexMap::with_capacity(spec.len() + 1);
    let mut links: IndexMap<String, Link> = IndexMap::new();
    let mut previous: Option<&str> = None;

    for (step, properties) in steps {
        let mut properties: Properties = properties.cloned().unwrap_or_default();
        let declared = match properties.shift_remove(NEEDS) {
            Some(value) => Needs::from_value(step, &value)?,
            None => None,
        };
        let predecessors = declared
            .map(Needs::into_vec)
            .unwrap_or_else(|| implicit_predecessor(step, previous));

        let mut node = Node::new(step, properties);
        for predecessor in predecessors {
            let link = Link::between(&predecessor, step);
            links.entry(link.id.clone()).or_insert(link);
            node.needs.insert(predecessor);
        }

        if let Some(saved) = canvas.and_then(|c| c.get(step)) {
            if let Some(position) = saved_position(step, saved, options.canvas_policy)? {
                node.position = position;
            }
        }

        nodes.insert(step.to_string(), node);
        previous = Some(step);
    }

    for node in nodes.values() {
        if let Some(missing) = node.needs.iter().find(|p| !nodes.contains_key(p.as_str())) {
            return Err(GraphError::UnknownPredecessor {
                step: node.id.clone(),
                predecessor: missing.clone(),
            });
        }
    }

    let depths = compute_depths(&nodes)?;
    let placed = apply_layered_layout(&mut nodes, &depths, options.spacing);

    debug!(
        nodes = nodes.len(),
        links = links.len(),
        placed,
        gateway_synthesized = synthesized.is_some(),
        "Built pipeline graph"
    );

    Ok(Graph {
        nodes,
        links,
        ..Graph::default()
    })
}

/// The linear-chain default: the previous step, unless this is the gateway.
fn implicit_predecessor(step: &str, previous: Option<&str>) -> Vec<String> {
    match previous {
        Some(previous) if step != GATEWAY => vec![previous.to_string()],
        _ => Vec::new(),
    }
}

fn saved_position(
    step: &str,
    saved: &SavedPosition,
    policy: CanvasPolicy,
) -> Result<Option<Position>, GraphError> {
    match (parse_coordinate(&saved.x), parse_coordinate(&saved.y)) {
        (Some(x), Some(y)) => Ok(Some(Position::at(x, y))),
        (x, _) => {
            let (axis, value) = if x.is_none() {
                ('x', &saved.x)
            } else {
                ('y', &saved.y)
            };
            match policy {
                CanvasPolicy::Strict => Err(GraphError::InvalidCanvasCoordinate {
                    step: step.to_string(),
                    axis,
                    value: value.to_string(),
                }),
                CanvasPolicy::Lenient => {
                    warn!(step, %axis, %value, "Ignoring non-numeric saved canvas coordinate");
                    Ok(None)
                }
            }
        }
    }
}

/// Integer value of a saved coordinate: numbers are truncated, strings contribute their
/// leading integer (`"120px"` is 120). Anything else is not a coordinate.
fn parse_coordinate(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => {
            let s = s.trim_start();
            let digits_start = usize::from(s.starts_with(['+', '-']));
            let digits_len = s[digits_start..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            if digits_len == 0 {
                return None;
            }
            s[..digits_start + digits_len].parse().ok()
        }
        _ => None,
    }
}
