//! Graph form of a pipeline and the transforms in and out of it.

mod builder;
pub mod depth;
mod encoder;
pub mod layout;
mod model;

pub use builder::build_graph;
pub use depth::{DepthCalculator, compute_depths, node_depth};
pub use encoder::encode_specification;
pub use layout::apply_layered_layout;
pub use model::*;
