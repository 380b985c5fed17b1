//! Helpers shared by the positioning pipeline and its callers.

use crate::graphlib::Graph;
use crate::NodeLabel;
use std::time::Instant;

pub fn build_layer_matrix<E, G>(g: &Graph<NodeLabel, E, G>) -> Vec<Vec<String>> {
    let mut ranked: Vec<(i32, usize, String)> = Vec::new();
    for id in g.nodes() {
        let Some(node) = g.node(id) else {
            continue;
        };
        let Some(rank) = node.rank else {
            continue;
        };
        ranked.push((rank, node.order.unwrap_or(0), id.to_string()));
    }

    let Some(min_rank) = ranked.iter().map(|&(rank, _, _)| rank).min() else {
        return Vec::new();
    };
    let max_rank = ranked
        .iter()
        .map(|&(rank, _, _)| rank)
        .max()
        .unwrap_or(min_rank);

    let mut layers: Vec<Vec<(usize, String)>> =
        vec![Vec::new(); (max_rank - min_rank + 1) as usize];
    for (rank, order, id) in ranked {
        layers[(rank - min_rank) as usize].push((order, id));
    }

    layers
        .into_iter()
        .map(|mut layer| {
            layer.sort_by_key(|&(order, _)| order);
            layer.into_iter().map(|(_, id)| id).collect()
        })
        .collect()
}

pub fn time_to_writer<T>(name: &str, writer: &mut dyn std::io::Write, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let ms = start.elapsed().as_millis();
    let _ = writeln!(writer, "{name} time: {ms}ms");
    let _ = writer.flush();
    out
}

pub fn time<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let mut stdout = std::io::stdout();
    time_to_writer(name, &mut stdout, f)
}
