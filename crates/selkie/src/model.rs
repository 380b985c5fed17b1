//! Label types consumed by the coordinate assignment core.

#[derive(Debug, Clone, PartialEq)]
pub struct GraphLabel {
    pub nodesep: f64,
    pub edgesep: f64,
    pub align: Option<String>,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            nodesep: 50.0,
            edgesep: 20.0,
            align: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    // Any value marks an edge dummy; "border" marks a subgraph border.
    pub dummy: Option<String>,
    pub labelpos: Option<LabelPos>,
    pub border_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPos {
    #[default]
    C,
    L,
    R,
}
