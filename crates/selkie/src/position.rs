//! Four-way biased alignment, narrowest-width selection, and balancing.

use crate::alignment::{vertical_alignment, Alignment};
use crate::compaction::horizontal_compaction;
use crate::conflicts::{find_type1_conflicts, find_type2_conflicts};
use crate::error::{InvalidGraph, Result};
use crate::graphlib::Graph;
use crate::sep::width;
use crate::util::build_layer_matrix;
use crate::{GraphLabel, NodeLabel};
use rustc_hash::FxHashMap;

// Iteration order also resolves width ties: earlier keys win.
const ALIGNMENTS: [&str; 4] = ["ul", "ur", "dl", "dr"];

pub fn position_x<E>(g: &Graph<NodeLabel, E, GraphLabel>) -> Result<FxHashMap<String, f64>> {
    let layering = build_layer_matrix(g);
    validate(g, &layering)?;

    let mut conflicts = find_type1_conflicts(g, &layering);
    for (v, ws) in find_type2_conflicts(g, &layering) {
        conflicts.entry(v).or_default().extend(ws);
    }

    let mut xss: FxHashMap<String, FxHashMap<String, f64>> = FxHashMap::default();
    for vert in ["u", "d"] {
        let mut oriented: Vec<Vec<String>> = if vert == "u" {
            layering.clone()
        } else {
            layering.iter().rev().cloned().collect()
        };

        for horiz in ["l", "r"] {
            if horiz == "r" {
                for layer in &mut oriented {
                    layer.reverse();
                }
            }

            let neighbors = |v: &str| -> Vec<String> {
                let adjacent = if vert == "u" {
                    g.predecessors(v)
                } else {
                    g.successors(v)
                };
                adjacent.into_iter().map(str::to_string).collect()
            };

            let Alignment { root, align } =
                vertical_alignment(g, &oriented, &conflicts, neighbors);
            let mut xs = horizontal_compaction(g, &oriented, &root, &align, horiz == "r");
            if horiz == "r" {
                for x in xs.values_mut() {
                    *x = -*x;
                }
            }
            xss.insert(format!("{vert}{horiz}"), xs);
        }
    }

    let smallest = find_smallest_width_alignment(g, &xss);
    align_coordinates(&mut xss, &smallest);
    Ok(balance(&xss, g.graph().align.as_deref()))
}

fn validate<E>(g: &Graph<NodeLabel, E, GraphLabel>, layering: &[Vec<String>]) -> Result<()> {
    let label = g.graph();
    let sep_ok = |s: f64| s.is_finite() && s >= 0.0;
    if !sep_ok(label.nodesep) || !sep_ok(label.edgesep) {
        return Err(InvalidGraph::InvalidSeparation {
            nodesep: label.nodesep,
            edgesep: label.edgesep,
        });
    }

    for v in g.nodes() {
        let Some(node) = g.node(v) else {
            continue;
        };
        if node.rank.is_none() {
            return Err(InvalidGraph::MissingRank { id: v.to_string() });
        }
        if node.order.is_none() {
            return Err(InvalidGraph::MissingOrder { id: v.to_string() });
        }
    }

    for layer in layering {
        for (position, v) in layer.iter().enumerate() {
            let Some(order) = g.node(v).and_then(|n| n.order) else {
                continue;
            };
            if order != position {
                return Err(InvalidGraph::OrderMismatch {
                    id: v.clone(),
                    order,
                    position,
                });
            }
        }
    }

    Ok(())
}

pub fn find_smallest_width_alignment<E>(
    g: &Graph<NodeLabel, E, GraphLabel>,
    xss: &FxHashMap<String, FxHashMap<String, f64>>,
) -> FxHashMap<String, f64> {
    let mut best: FxHashMap<String, f64> = FxHashMap::default();
    let mut best_width = f64::INFINITY;

    for key in ALIGNMENTS {
        let Some(xs) = xss.get(key) else {
            continue;
        };
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (v, &x) in xs {
            let half = width(g, v) / 2.0;
            min = min.min(x - half);
            max = max.max(x + half);
        }
        if max - min < best_width {
            best_width = max - min;
            best = xs.clone();
        }
    }

    best
}

// Left-biased alignments match the minimum of `align_to`, right-biased ones
// its maximum; `align_to` itself ends up with a zero shift.
pub fn align_coordinates(
    xss: &mut FxHashMap<String, FxHashMap<String, f64>>,
    align_to: &FxHashMap<String, f64>,
) {
    let (to_min, to_max) = min_max(align_to);

    for key in ALIGNMENTS {
        let Some(xs) = xss.get_mut(key) else {
            continue;
        };
        let (min, max) = min_max(xs);
        let delta = if key.ends_with('l') {
            to_min - min
        } else {
            to_max - max
        };
        if delta != 0.0 {
            for x in xs.values_mut() {
                *x += delta;
            }
        }
    }
}

fn min_max(xs: &FxHashMap<String, f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in xs.values() {
        min = min.min(x);
        max = max.max(x);
    }
    (min, max)
}

pub fn balance(
    xss: &FxHashMap<String, FxHashMap<String, f64>>,
    align: Option<&str>,
) -> FxHashMap<String, f64> {
    let Some(ul) = xss.get("ul") else {
        return FxHashMap::default();
    };

    if let Some(key) = align.map(str::to_ascii_lowercase) {
        if let Some(xs) = xss.get(key.as_str()) {
            return xs.clone();
        }
    }

    let mut out: FxHashMap<String, f64> = FxHashMap::default();
    for v in ul.keys() {
        let mut candidates: Vec<f64> = ALIGNMENTS
            .iter()
            .filter_map(|key| xss.get(*key).and_then(|xs| xs.get(v)).copied())
            .collect();
        candidates.sort_by(f64::total_cmp);
        // Average the two middle values of the four candidates.
        if let (Some(&a), Some(&b)) = (candidates.get(1), candidates.get(2)) {
            out.insert(v.clone(), (a + b) / 2.0);
        }
    }
    out
}
