use serde::{Deserialize, Serialize};

/// Spacing units of the layered layout: `x` between columns, `y` between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpacing {
    pub x: i64,
    pub y: i64,
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self { x: 250, y: 150 }
    }
}

/// What to do with a saved canvas coordinate that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasPolicy {
    /// Ignore the saved entry and let the layout place the node.
    #[default]
    Lenient,
    /// Fail with `GraphError::InvalidCanvasCoordinate`.
    Strict,
}

/// Options consumed by graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default)]
    pub spacing: LayoutSpacing,
    #[serde(default)]
    pub canvas_policy: CanvasPolicy,
}
