use selkie::graphlib::Graph;
use selkie::{conflicts, util, GraphLabel, NodeLabel};

fn new_graph() -> Graph<NodeLabel, (), GraphLabel> {
    Graph::new()
}

fn set_node_rank_order(g: &mut Graph<NodeLabel, (), GraphLabel>, id: &str, rank: i32, order: usize) {
    g.set_node(
        id,
        NodeLabel {
            rank: Some(rank),
            order: Some(order),
            ..Default::default()
        },
    );
}

// Two nodes per layer with the edges crossing: a -> d and b -> c.
fn crossed_pair() -> (Graph<NodeLabel, (), GraphLabel>, Vec<Vec<String>>) {
    let mut g = new_graph();
    set_node_rank_order(&mut g, "a", 0, 0);
    set_node_rank_order(&mut g, "b", 0, 1);
    set_node_rank_order(&mut g, "c", 1, 0);
    set_node_rank_order(&mut g, "d", 1, 1);
    g.set_edge("a", "d");
    g.set_edge("b", "c");
    let layering = util::build_layer_matrix(&g);
    (g, layering)
}

fn mark_dummy(g: &mut Graph<NodeLabel, (), GraphLabel>, ids: &[&str], kind: &str) {
    for id in ids {
        g.node_mut(id).unwrap().dummy = Some(kind.to_string());
    }
}

#[test]
fn find_type1_conflicts_does_not_mark_edges_that_have_no_conflict() {
    let (mut g, layering) = crossed_pair();

    g.remove_edge("a", "d");
    g.remove_edge("b", "c");
    g.set_edge("a", "c");
    g.set_edge("b", "d");

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(!conflicts::has_conflict(&conflicts, "a", "c"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "d"));
}

#[test]
fn find_type1_conflicts_does_not_mark_type_0_conflicts_no_dummies() {
    let (g, layering) = crossed_pair();

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(!conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type1_conflicts_does_not_mark_type_0_conflicts_with_a_single_dummy() {
    for dummy in ["a", "b", "c", "d"] {
        let (mut g, layering) = crossed_pair();
        mark_dummy(&mut g, &[dummy], "true");

        let conflicts = conflicts::find_type1_conflicts(&g, &layering);
        assert!(!conflicts::has_conflict(&conflicts, "a", "d"));
        assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
    }
}

#[test]
fn find_type1_conflicts_marks_the_non_inner_segment_a_is_non_dummy() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["b", "c", "d"], "true");

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type1_conflicts_marks_the_non_inner_segment_b_is_non_dummy() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["a", "c", "d"], "true");

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(!conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type1_conflicts_marks_the_non_inner_segment_c_is_non_dummy() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["a", "b", "d"], "true");

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(!conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type1_conflicts_marks_the_non_inner_segment_d_is_non_dummy() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["a", "b", "c"], "true");

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type1_conflicts_never_marks_crossing_inner_segments() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["a", "b", "c", "d"], "true");

    let conflicts = conflicts::find_type1_conflicts(&g, &layering);
    assert!(!conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type2_conflicts_marks_crossings_favoring_border_segments_1() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["a", "d"], "true");
    mark_dummy(&mut g, &["b", "c"], "border");

    let conflicts = conflicts::find_type2_conflicts(&g, &layering);
    assert!(conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_type2_conflicts_marks_crossings_favoring_border_segments_2() {
    let (mut g, layering) = crossed_pair();
    mark_dummy(&mut g, &["b", "c"], "true");
    mark_dummy(&mut g, &["a", "d"], "border");

    let conflicts = conflicts::find_type2_conflicts(&g, &layering);
    assert!(!conflicts::has_conflict(&conflicts, "a", "d"));
    assert!(conflicts::has_conflict(&conflicts, "b", "c"));
}

#[test]
fn find_other_inner_segment_node_returns_the_dummy_predecessor() {
    let mut g = new_graph();
    set_node_rank_order(&mut g, "u", 0, 0);
    set_node_rank_order(&mut g, "v", 1, 0);
    g.set_edge("u", "v");

    assert_eq!(conflicts::find_other_inner_segment_node(&g, "v"), None);

    mark_dummy(&mut g, &["v"], "true");
    assert_eq!(conflicts::find_other_inner_segment_node(&g, "v"), None);

    mark_dummy(&mut g, &["u"], "true");
    assert_eq!(
        conflicts::find_other_inner_segment_node(&g, "v"),
        Some("u".to_string())
    );
}

#[test]
fn has_conflict_is_symmetric() {
    let mut conflicts: conflicts::Conflicts = Default::default();
    conflicts::add_conflict(&mut conflicts, "b", "a");
    assert!(conflicts::has_conflict(&conflicts, "a", "b"));
    assert!(conflicts::has_conflict(&conflicts, "b", "a"));
}

#[test]
fn has_conflict_works_for_multiple_conflicts_with_the_same_node() {
    let mut conflicts: conflicts::Conflicts = Default::default();
    conflicts::add_conflict(&mut conflicts, "a", "b");
    conflicts::add_conflict(&mut conflicts, "a", "c");
    assert!(conflicts::has_conflict(&conflicts, "a", "b"));
    assert!(conflicts::has_conflict(&conflicts, "a", "c"));
    assert!(!conflicts::has_conflict(&conflicts, "b", "c"));
}
