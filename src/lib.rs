//! # Podflow - Pipeline Specification / Node Graph Transform
//!
//! **Podflow** converts declarative pod pipelines (steps wired together through `needs`)
//! into a positioned node-link graph for an interactive editor, and converts the edited
//! graph back into the pipeline document.
//!
//! ## Core Workflow
//!
//! 1.  **Load the document**: parse pipeline text into a [`FlowDocument`](pipeline::FlowDocument)
//!     (or build a [`Specification`](pipeline::Specification) directly).
//! 2.  **Build the graph**: the [`FlowConverter`](converter::FlowConverter) creates one node per
//!     step (plus a `gateway` entry point when the document has none), one link per
//!     dependency, and places every node without saved coordinates with a layered layout.
//! 3.  **Edit**: the UI moves nodes and edits their properties in place.
//! 4.  **Export**: the converter rebuilds each pod's `needs` from the links, restores typed
//!     property values and saves node positions under `with.board.canvas`.
//!
//! ## Quick Start
//!
//! ```rust
//! use podflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! !Flow
//! pods:
//!   encoder:
//!     uses: encode.yml
//!   indexer:
//!     uses: index.yml
//!     read_only: 'true'
//! ";
//!     let converter = FlowConverter::builder()
//!         .with_spacing(LayoutSpacing { x: 200, y: 100 })
//!         .build();
//!
//!     let graph = converter.import_text(text)?;
//!     assert!(graph.node("gateway").is_some());
//!     assert_eq!(graph.node("indexer").unwrap().depth, Some(2));
//!     assert_eq!(graph.node("indexer").unwrap().position, Position::at(200, 300));
//!
//!     let exported = converter.export_text(&graph)?;
//!     assert!(exported.starts_with("!Flow\n"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod prelude;
pub mod schema;
