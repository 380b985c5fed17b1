//! Vertical alignment of vertices into blocks.

use crate::conflicts::{has_conflict, Conflicts};
use crate::graphlib::Graph;
use crate::NodeLabel;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub root: FxHashMap<String, String>,
    pub align: FxHashMap<String, String>,
}

pub fn vertical_alignment<E, G, F>(
    _g: &Graph<NodeLabel, E, G>,
    layering: &[Vec<String>],
    conflicts: &Conflicts,
    neighbor_fn: F,
) -> Alignment
where
    F: Fn(&str) -> Vec<String>,
{
    let mut root: FxHashMap<String, String> = FxHashMap::default();
    let mut align: FxHashMap<String, String> = FxHashMap::default();
    // Positions are cached from the oriented layering; the in-graph `order`
    // may run the other way.
    let mut pos: FxHashMap<&str, usize> = FxHashMap::default();

    for layer in layering {
        for (idx, v) in layer.iter().enumerate() {
            root.insert(v.clone(), v.clone());
            align.insert(v.clone(), v.clone());
            pos.insert(v.as_str(), idx);
        }
    }

    for layer in layering {
        let mut prev_idx: isize = -1;
        for v in layer {
            let mut ws = neighbor_fn(v);
            if ws.is_empty() {
                continue;
            }
            ws.sort_by_key(|w| pos.get(w.as_str()).copied().unwrap_or(usize::MAX));

            let mid = (ws.len() - 1) as f64 / 2.0;
            let lo = mid.floor() as usize;
            let hi = mid.ceil() as usize;
            for w in &ws[lo..=hi] {
                let Some(&w_pos) = pos.get(w.as_str()) else {
                    continue;
                };
                let unaligned = align.get(v.as_str()).is_some_and(|a| a == v);
                if !unaligned || prev_idx >= w_pos as isize || has_conflict(conflicts, v, w) {
                    continue;
                }

                let Some(w_root) = root.get(w.as_str()).cloned() else {
                    continue;
                };
                align.insert(w.clone(), v.clone());
                align.insert(v.clone(), w_root.clone());
                root.insert(v.clone(), w_root);
                prev_idx = w_pos as isize;
            }
        }
    }

    Alignment { root, align }
}
