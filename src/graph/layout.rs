//! Layered layout: one row per depth, one column per node within a row.

use super::model::{Node, Position};
use crate::config::LayoutSpacing;
use ahash::AHashMap;
use indexmap::IndexMap;

/// Stores each node's depth and places every node that lacks a usable x.
///
/// Nodes are visited in order. Within a row, every node takes the next column slot,
/// including nodes that keep a saved position, so computed and saved nodes never share
/// a column index. A placed node lands at
/// `(column * spacing.x + spacing.x, depth * spacing.y + spacing.y)`, saturating at the
/// bounds of `i64`.
///
/// Returns the number of nodes that were placed.
pub fn apply_layered_layout(
    nodes: &mut IndexMap<String, Node>,
    depths: &IndexMap<String, usize>,
    spacing: LayoutSpacing,
) -> usize {
    let mut population: AHashMap<usize, i64> = AHashMap::new();
    let mut placed = 0;

    for (id, node) in nodes.iter_mut() {
        let depth = depths.get(id).copied().unwrap_or(0);
        node.depth = Some(depth);

        let column = *population
            .entry(depth)
            .and_modify(|count| *count += 1)
            .or_insert(0);

        if !node.position.has_usable_x() {
            let row = i64::try_from(depth).unwrap_or(i64::MAX);
            node.position = Position::at(
                column.saturating_mul(spacing.x).saturating_add(spacing.x),
                row.saturating_mul(spacing.y).saturating_add(spacing.y),
            );
            placed += 1;
        }
    }

    placed
}
