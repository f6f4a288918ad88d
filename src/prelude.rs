//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to move a pipeline between its document and
//! graph forms.
//!
//! # Example
//!
//! ```rust,no_run
//! use podflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let text = std::fs::read_to_string("path/to/flow.yml")?;
//! let converter = FlowConverter::builder().build();
//!
//! let mut graph = converter.import_text(&text)?;
//! if let Some(node) = graph.node_mut("encoder") {
//!     node.position = Position::at(400, 300);
//! }
//! println!("{}", converter.export_text(&graph)?);
//! # Ok(())
//! # }
//! ```

pub use crate::config::{CanvasPolicy, LayoutOptions, LayoutSpacing};
pub use crate::converter::{ConverterBuilder, FlowConverter};
pub use crate::error::{DocumentError, FlowError, GraphError, SchemaError};
pub use crate::graph::{Graph, Link, Node, Position, build_graph, encode_specification};
pub use crate::pipeline::{
    FlowDocument, GATEWAY, Needs, Properties, SavedCanvas, SavedPosition, Specification,
};
pub use crate::schema::{PropertyKind, PropertyTypes};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
