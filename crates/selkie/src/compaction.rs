//! Block graph construction and two-sweep horizontal compaction.

use crate::graphlib::Graph;
use crate::sep::sep;
use crate::{GraphLabel, NodeLabel};
use rustc_hash::{FxHashMap, FxHashSet};

fn root_of<'a>(root: &'a FxHashMap<String, String>, v: &'a str) -> &'a str {
    root.get(v).map(String::as_str).unwrap_or(v)
}

pub fn build_block_graph<E>(
    g: &Graph<NodeLabel, E, GraphLabel>,
    layering: &[Vec<String>],
    root: &FxHashMap<String, String>,
    reverse_sep: bool,
) -> Graph<(), f64, ()> {
    let mut block_g: Graph<(), f64, ()> = Graph::new();

    for layer in layering {
        let mut left: Option<&str> = None;
        for v in layer {
            let v_root = root_of(root, v);
            block_g.ensure_node(v_root);

            if let Some(u) = left {
                let u_root = root_of(root, u);
                let needed = sep(g, v, u, reverse_sep);
                let prev = block_g.edge(u_root, v_root).copied().unwrap_or(0.0);
                block_g.set_edge_with_label(u_root, v_root, needed.max(prev));
            }
            left = Some(v);
        }
    }

    block_g
}

// Depth-first worklist: a node is expanded once, then assigned every time it
// resurfaces, so it is assigned only after everything reachable from it.
fn sweep<F, S>(block_g: &Graph<(), f64, ()>, mut frontier: F, mut assign: S)
where
    F: FnMut(&str) -> Vec<String>,
    S: FnMut(&str),
{
    let mut stack: Vec<String> = block_g.node_ids();
    let mut expanded: FxHashSet<String> = FxHashSet::default();

    while let Some(v) = stack.pop() {
        if expanded.contains(v.as_str()) {
            assign(&v);
        } else {
            expanded.insert(v.clone());
            stack.push(v.clone());
            stack.extend(frontier(&v));
        }
    }
}

pub fn horizontal_compaction<E>(
    g: &Graph<NodeLabel, E, GraphLabel>,
    layering: &[Vec<String>],
    root: &FxHashMap<String, String>,
    align: &FxHashMap<String, String>,
    reverse_sep: bool,
) -> FxHashMap<String, f64> {
    let block_g = build_block_graph(g, layering, root, reverse_sep);
    let avoid_border = if reverse_sep {
        "borderLeft"
    } else {
        "borderRight"
    };

    let mut xs: FxHashMap<String, f64> = FxHashMap::default();

    // First pass: assign smallest coordinates.
    sweep(
        &block_g,
        |v: &str| block_g.predecessors(v).iter().map(|p| p.to_string()).collect(),
        |v: &str| {
            let mut x: f64 = 0.0;
            for e in block_g.in_edges(v) {
                let weight = block_g.edge_by_key(&e).copied().unwrap_or(0.0);
                let upstream = xs.get(e.v.as_str()).copied().unwrap_or(0.0);
                x = x.max(upstream + weight);
            }
            xs.insert(v.to_string(), x);
        },
    );

    // Second pass: pull blocks right up to the slack of their out-edges.
    // Border vertices on the avoided side stay pinned by the first pass.
    sweep(
        &block_g,
        |v: &str| block_g.successors(v).iter().map(|s| s.to_string()).collect(),
        |v: &str| {
            let mut slack = f64::INFINITY;
            for e in block_g.out_edges(v) {
                let weight = block_g.edge_by_key(&e).copied().unwrap_or(0.0);
                let downstream = xs.get(e.w.as_str()).copied().unwrap_or(0.0);
                slack = slack.min(downstream - weight);
            }

            let border_type = g.node(v).and_then(|n| n.border_type.as_deref());
            if slack.is_finite() && border_type != Some(avoid_border) {
                let x = xs.entry(v.to_string()).or_insert(0.0);
                *x = (*x).max(slack);
            }
        },
    );

    // Every vertex inherits the coordinate of its block root.
    let mut out: FxHashMap<String, f64> = FxHashMap::default();
    for v in align.keys() {
        let x = xs.get(root_of(root, v)).copied().unwrap_or(0.0);
        out.insert(v.clone(), x);
    }
    out
}
