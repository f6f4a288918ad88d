use itertools::Itertools;
use thiserror::Error;

/// Errors raised while building a graph from a specification or encoding it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Cyclic dependency between steps: {}", .path.iter().join(" -> "))]
    CyclicDependency { path: Vec<String> },

    #[error("Step '{step}' needs '{predecessor}', which is not a step of this pipeline")]
    UnknownPredecessor { step: String, predecessor: String },

    #[error("Label '{label}' is used by both node '{first}' and node '{second}'")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },

    #[error("Step '{step}' has a 'needs' value that is neither a step name nor a list of step names")]
    InvalidNeeds { step: String },

    #[error("Saved canvas entry for step '{step}' has a non-numeric {axis} coordinate: {value}")]
    InvalidCanvasCoordinate {
        step: String,
        axis: char,
        value: String,
    },

    #[error("Node '{0}' is not part of the graph")]
    UnknownNode(String),

    #[error("Link '{link}' points at node '{node}', which is not part of the graph")]
    DanglingLink { link: String, node: String },
}

/// Errors that can occur while loading a property schema.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse property schema: {0}")]
    Parse(String),
}

/// Errors that can occur while reading or writing the pipeline text form.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse pipeline document: {0}")]
    Parse(String),

    #[error("Failed to serialize pipeline document: {0}")]
    Serialize(String),

    #[error("Saved canvas under 'with.board.canvas' is malformed: {0}")]
    InvalidCanvas(String),
}

/// Any failure produced by a [`FlowConverter`](crate::converter::FlowConverter) operation.
#[derive(Error, Debug, Clone)]
pub enum FlowError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
