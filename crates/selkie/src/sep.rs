//! Minimum separation between layer-adjacent vertices.

use crate::graphlib::Graph;
use crate::{GraphLabel, LabelPos, NodeLabel};

pub fn sep<E>(g: &Graph<NodeLabel, E, GraphLabel>, v: &str, w: &str, reverse_sep: bool) -> f64 {
    let half_gap = |label: &NodeLabel| {
        if label.dummy.is_some() {
            g.graph().edgesep / 2.0
        } else {
            g.graph().nodesep / 2.0
        }
    };
    // A left/right labelpos shifts the logical center by half the width;
    // reverse_sep flips the correction for right-to-left traversals.
    let correction = |delta: f64| if reverse_sep { delta } else { -delta };

    let mut sum = 0.0;

    if let Some(v_label) = g.node(v) {
        sum += v_label.width / 2.0 + half_gap(v_label);
        sum += match v_label.labelpos {
            Some(LabelPos::L) => correction(-v_label.width / 2.0),
            Some(LabelPos::R) => correction(v_label.width / 2.0),
            _ => 0.0,
        };
    }

    if let Some(w_label) = g.node(w) {
        sum += w_label.width / 2.0 + half_gap(w_label);
        sum += match w_label.labelpos {
            Some(LabelPos::L) => correction(w_label.width / 2.0),
            Some(LabelPos::R) => correction(-w_label.width / 2.0),
            _ => 0.0,
        };
    }

    sum
}

pub fn width<E, G>(g: &Graph<NodeLabel, E, G>, v: &str) -> f64 {
    g.node(v).map(|n| n.width).unwrap_or(0.0)
}
