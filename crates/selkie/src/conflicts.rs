//! Crossing conflicts between edge segments.
//!
//! Type-1 conflicts cross a non-inner segment with an inner segment, type-2
//! conflicts cross two inner segments. Both veto candidate vertical
//! alignments so that inner segments stay straight.

use crate::graphlib::Graph;
use crate::NodeLabel;
use rustc_hash::{FxHashMap, FxHashSet};

// Unordered pairs, keyed by the lexicographically smaller id.
pub type Conflicts = FxHashMap<String, FxHashSet<String>>;

pub fn add_conflict(conflicts: &mut Conflicts, v: &str, w: &str) {
    let (v, w) = if v <= w { (v, w) } else { (w, v) };
    conflicts
        .entry(v.to_string())
        .or_default()
        .insert(w.to_string());
}

pub fn has_conflict(conflicts: &Conflicts, v: &str, w: &str) -> bool {
    let (v, w) = if v <= w { (v, w) } else { (w, v) };
    conflicts.get(v).is_some_and(|ws| ws.contains(w))
}

fn is_dummy<E, G>(g: &Graph<NodeLabel, E, G>, v: &str) -> bool {
    g.node(v).is_some_and(|n| n.dummy.is_some())
}

pub fn find_other_inner_segment_node<E, G>(g: &Graph<NodeLabel, E, G>, v: &str) -> Option<String> {
    if !is_dummy(g, v) {
        return None;
    }
    g.predecessors(v)
        .into_iter()
        .find(|u| is_dummy(g, u))
        .map(str::to_string)
}

pub fn find_type1_conflicts<E, G>(
    g: &Graph<NodeLabel, E, G>,
    layering: &[Vec<String>],
) -> Conflicts {
    let mut conflicts = Conflicts::default();

    for rank_pair in layering.windows(2) {
        let (prev_layer, layer) = (&rank_pair[0], &rank_pair[1]);
        let prev_len = prev_layer.len();
        let mut k0 = 0;
        let mut scan_pos = 0;

        for (i, v) in layer.iter().enumerate() {
            let w = find_other_inner_segment_node(g, v);
            let k1 = w
                .as_deref()
                .and_then(|w| g.node(w))
                .and_then(|n| n.order)
                .unwrap_or(prev_len);

            if w.is_none() && i + 1 != layer.len() {
                continue;
            }

            // Predecessors outside [k0, k1] cross one of the bracketing inner
            // segments.
            for scan_node in &layer[scan_pos..=i] {
                let scan_dummy = is_dummy(g, scan_node);
                for u in g.predecessors(scan_node) {
                    let Some(u_label) = g.node(u) else {
                        continue;
                    };
                    let u_pos = u_label.order.unwrap_or(0);
                    if (u_pos < k0 || k1 < u_pos) && !(u_label.dummy.is_some() && scan_dummy) {
                        add_conflict(&mut conflicts, u, scan_node);
                    }
                }
            }
            scan_pos = i + 1;
            k0 = k1;
        }
    }

    conflicts
}

pub fn find_type2_conflicts<E, G>(
    g: &Graph<NodeLabel, E, G>,
    layering: &[Vec<String>],
) -> Conflicts {
    let mut conflicts = Conflicts::default();

    for rank_pair in layering.windows(2) {
        let (north, south) = (&rank_pair[0], &rank_pair[1]);

        // -1 stands in for "no border seen yet" on either side.
        let mut prev_north_pos: isize = -1;
        let mut next_north_pos: isize = -1;
        let mut south_pos = 0;

        for (south_lookahead, v) in south.iter().enumerate() {
            let is_border = g
                .node(v)
                .and_then(|n| n.dummy.as_deref())
                .is_some_and(|d| d == "border");
            if is_border {
                let north_order = g
                    .predecessors(v)
                    .first()
                    .copied()
                    .and_then(|u| g.node(u))
                    .and_then(|n| n.order);
                if let Some(order) = north_order {
                    next_north_pos = order as isize;
                    scan(
                        g,
                        &mut conflicts,
                        south,
                        south_pos,
                        south_lookahead,
                        prev_north_pos,
                        next_north_pos,
                    );
                    south_pos = south_lookahead;
                    prev_north_pos = next_north_pos;
                }
            }

            // Rescanning the tail after every vertex is deliberate: it picks
            // up south vertices after the last border, and re-marking a
            // conflict is idempotent.
            scan(
                g,
                &mut conflicts,
                south,
                south_pos,
                south.len(),
                next_north_pos,
                north.len() as isize,
            );
        }
    }

    conflicts
}

fn scan<E, G>(
    g: &Graph<NodeLabel, E, G>,
    conflicts: &mut Conflicts,
    south: &[String],
    lo: usize,
    hi: usize,
    north_left: isize,
    north_right: isize,
) {
    for v in &south[lo..hi] {
        if !is_dummy(g, v) {
            continue;
        }
        for u in g.predecessors(v) {
            let Some(u_label) = g.node(u) else {
                continue;
            };
            if u_label.dummy.is_none() {
                continue;
            }
            let u_pos = u_label.order.unwrap_or(0) as isize;
            if u_pos < north_left || u_pos > north_right {
                add_conflict(conflicts, u, v);
            }
        }
    }
}
