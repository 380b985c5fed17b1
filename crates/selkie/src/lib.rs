//! Horizontal coordinate assignment for layered directed acyclic graphs,
//! after Brandes & Kopf. Ranks, orders, and widths come from the surrounding
//! layout pipeline; this crate only assigns x.

pub use selkie_graphlib as graphlib;

pub mod alignment;
pub mod compaction;
pub mod conflicts;
pub mod error;
pub mod position;
pub mod sep;
pub mod util;

mod model;

pub use alignment::{vertical_alignment, Alignment};
pub use compaction::{build_block_graph, horizontal_compaction};
pub use conflicts::{
    add_conflict, find_other_inner_segment_node, find_type1_conflicts, find_type2_conflicts,
    has_conflict, Conflicts,
};
pub use error::{InvalidGraph, Result};
pub use model::{GraphLabel, LabelPos, NodeLabel};
pub use position::{align_coordinates, balance, find_smallest_width_alignment, position_x};
pub use sep::{sep, width};
pub use util::build_layer_matrix;
