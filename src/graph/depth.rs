//! Depth of nodes in the needs graph.
//!
//! A node without predecessors has depth 0; any other node sits one below its deepest
//! predecessor. The traversal marks nodes as visiting/done, so a cycle is reported as
//! [`GraphError::CyclicDependency`] instead of looping forever, and every depth is
//! computed exactly once. It keeps its own stack, so chain length is bounded by memory.

use super::model::Node;
use crate::error::GraphError;
use ahash::AHashMap;
use indexmap::IndexMap;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done(usize),
}

/// Memoizing depth traversal over a node map.
pub struct DepthCalculator<'a> {
    nodes: &'a IndexMap<String, Node>,
    marks: AHashMap<&'a str, Mark>,
}

/// A node on the traversal stack and how far its predecessors have been walked.
#[derive(Copy, Clone)]
struct Frame<'a> {
    id: &'a str,
    next: usize,
    deepest: Option<usize>,
}

impl<'a> Frame<'a> {
    fn new(id: &'a str) -> Self {
        Self {
            id,
            next: 0,
            deepest: None,
        }
    }

    fn record(&mut self, depth: usize) {
        self.deepest = Some(self.deepest.map_or(depth, |d| d.max(depth)));
    }

    fn depth(&self) -> usize {
        self.deepest.map_or(0, |d| d + 1)
    }
}

impl<'a> DepthCalculator<'a> {
    pub fn new(nodes: &'a IndexMap<String, Node>) -> Self {
        Self {
            nodes,
            marks: AHashMap::with_capacity(nodes.len()),
        }
    }

    /// Depth of `id`: 0 without predecessors, else `1 + max(depth of predecessors)`.
    pub fn depth_of(&mut self, id: &str) -> Result<usize, GraphError> {
        let nodes = self.nodes;
        let (key, _) = nodes
            .get_key_value(id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
        self.visit(key)
    }

    /// Depth-first walk with an explicit stack, so long chains cost heap, not call frames.
    fn visit(&mut self, root: &'a str) -> Result<usize, GraphError> {
        match self.marks.get(root) {
            Some(Mark::Done(depth)) => return Ok(*depth),
            Some(Mark::Visiting) => return Err(cycle_through(&[], root)),
            None => {}
        }

        let nodes = self.nodes;
        let mut frames = vec![Frame::new(root)];
        self.marks.insert(root, Mark::Visiting);

        loop {
            let top = frames.len() - 1;
            let Frame { id, next, .. } = frames[top];

            let Some(predecessor) = nodes[id].needs.get_index(next) else {
                let depth = frames[top].depth();
                self.marks.insert(id, Mark::Done(depth));
                frames.pop();
                match frames.last_mut() {
                    Some(parent) => parent.record(depth),
                    None => return Ok(depth),
                }
                continue;
            };

            frames[top].next += 1;
            let (key, _) = nodes.get_key_value(predecessor.as_str()).ok_or_else(|| {
                GraphError::UnknownPredecessor {
                    step: id.to_string(),
                    predecessor: predecessor.clone(),
                }
            })?;
            match self.marks.get(key.as_str()).copied() {
                Some(Mark::Done(depth)) => frames[top].record(depth),
                Some(Mark::Visiting) => return Err(cycle_through(&frames, key)),
                None => {
                    self.marks.insert(key, Mark::Visiting);
                    frames.push(Frame::new(key));
                }
            }
        }
    }
}

/// The cycle closed by reaching `id` again: from its frame down to the top, then `id`.
fn cycle_through(frames: &[Frame<'_>], id: &str) -> GraphError {
    let start = frames.iter().position(|f| f.id == id).unwrap_or(0);
    let mut path: Vec<String> = frames[start..].iter().map(|f| f.id.to_string()).collect();
    path.push(id.to_string());
    GraphError::CyclicDependency { path }
}

/// Depth of every node, in node order.
pub fn compute_depths(
    nodes: &IndexMap<String, Node>,
) -> Result<IndexMap<String, usize>, GraphError> {
    let mut calculator = DepthCalculator::new(nodes);
    nodes
        .keys()
        .map(|id| calculator.depth_of(id).map(|depth| (id.clone(), depth)))
        .collect()
}

/// Depth of a single node.
pub fn node_depth(nodes: &IndexMap<String, Node>, id: &str) -> Result<usize, GraphError> {
    DepthCalculator::new(nodes).depth_of(id)
}
