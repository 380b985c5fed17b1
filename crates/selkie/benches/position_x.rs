use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use selkie::graphlib::Graph;
use selkie::{position_x, GraphLabel, NodeLabel};
use std::hint::black_box;

// A layered grid with straight and diagonal edges, large enough that every
// block chain spans several layers.
fn grid_graph(layers: usize, per_layer: usize) -> Graph<NodeLabel, (), GraphLabel> {
    let mut g: Graph<NodeLabel, (), GraphLabel> = Graph::new();

    for rank in 0..layers {
        for order in 0..per_layer {
            g.set_node(
                format!("n{rank}_{order}"),
                NodeLabel {
                    width: 40.0,
                    rank: Some(rank as i32),
                    order: Some(order),
                    // Every third node acts as an edge dummy.
                    dummy: (order % 3 == 2).then(|| "edge".to_string()),
                    ..Default::default()
                },
            );
        }
    }

    for rank in 1..layers {
        for order in 0..per_layer {
            g.set_edge(format!("n{}_{order}", rank - 1), format!("n{rank}_{order}"));
            if order + 1 < per_layer {
                g.set_edge(
                    format!("n{}_{order}", rank - 1),
                    format!("n{rank}_{}", order + 1),
                );
            }
        }
    }

    g
}

fn bench_position_x(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_x");
    for (layers, per_layer) in [(10, 10), (30, 30), (100, 20)] {
        let g = grid_graph(layers, per_layer);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layers}x{per_layer}")),
            &g,
            |b, g| b.iter(|| position_x(black_box(g))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_position_x);
criterion_main!(benches);
