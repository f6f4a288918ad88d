use crate::pipeline::Properties;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

pub const IN_PORT: &str = "inPort";
pub const OUT_PORT: &str = "outPort";

/// The positioned node-link form of a pipeline, as rendered and edited by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub offset: Offset,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub nodes: IndexMap<String, Node>,
    pub links: IndexMap<String, Link>,
    /// Editor selection state, keyed by node or link id. Not part of the pipeline.
    #[serde(default)]
    pub selected: Properties,
    #[serde(default)]
    pub hovered: Properties,
    /// Document metadata carried through to the next export.
    #[serde(default)]
    pub with: Properties,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            scale: default_scale(),
            nodes: IndexMap::new(),
            links: IndexMap::new(),
            selected: Properties::new(),
            hovered: Properties::new(),
            with: Properties::new(),
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn link(&self, from: &str, to: &str) -> Option<&Link> {
        self.links.get(&Link::id_for(from, to))
    }
}

/// Viewport pan of the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub ports: Ports,
    /// Ids of the direct predecessors.
    pub needs: IndexSet<String>,
    pub position: Position,
    /// Step properties without `needs`.
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl Node {
    /// A node labelled with its own id, with both fixed ports and no position yet.
    pub fn new(id: impl Into<String>, properties: Properties) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            ports: Ports::default(),
            needs: IndexSet::new(),
            position: Position::default(),
            properties,
            depth: None,
        }
    }

    /// The name a node is known by outside the graph: its label, else its `name`
    /// property, else its id.
    pub fn display_name(&self) -> &str {
        if !self.label.is_empty() {
            return &self.label;
        }
        match self.properties.get("name").and_then(|v| v.as_str()) {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// The two fixed ports every node carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ports {
    #[serde(rename = "inPort")]
    pub in_port: Port,
    #[serde(rename = "outPort")]
    pub out_port: Port,
}

impl Default for Ports {
    fn default() -> Self {
        Self {
            in_port: Port {
                id: IN_PORT.to_string(),
                kind: PortKind::Input,
            },
            out_port: Port {
                id: OUT_PORT.to_string(),
                kind: PortKind::Output,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PortKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    Input,
    Output,
}

/// Canvas coordinates of a node. Unset until a saved canvas or the layout fills them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl Position {
    pub fn at(x: i64, y: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// A zero or missing x means the node still has to be laid out.
    pub fn has_usable_x(&self) -> bool {
        matches!(self.x, Some(x) if x != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRef {
    pub node_id: String,
    pub port_id: String,
}

/// A directed edge from a predecessor's output port to a successor's input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub from: PortRef,
    pub to: PortRef,
}

impl Link {
    pub fn between(from: &str, to: &str) -> Self {
        Self {
            id: Self::id_for(from, to),
            from: PortRef {
                node_id: from.to_string(),
                port_id: OUT_PORT.to_string(),
            },
            to: PortRef {
                node_id: to.to_string(),
                port_id: IN_PORT.to_string(),
            },
        }
    }

    pub fn id_for(from: &str, to: &str) -> String {
        format!("{}-to-{}", from, to)
    }
}
