use serde::{Deserialize, Serialize};

/// Declared primitive kind of a pod property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "bool")]
    Bool,
    /// Enumerated socket tag (e.g. `PULL_BIND`).
    SocketType,
    /// Enumerated replica scheduling tag (e.g. `ANY`, `ALL`).
    ReplicaType,
}

impl PropertyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKind::Str => "str",
            PropertyKind::Int => "int",
            PropertyKind::Bool => "bool",
            PropertyKind::SocketType => "SocketType",
            PropertyKind::ReplicaType => "ReplicaType",
        }
    }
}

/// One entry of the property schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
}
