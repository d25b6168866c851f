use matrix_paths::algorithm::longest_path::topological_order;
use matrix_paths::graph::generators::seeded_symmetric_matrix;
use matrix_paths::graph::{fold_vertex_costs, Graph, UndirectedEdge};
use matrix_paths::graph::orientation::undirected_edges;
use matrix_paths::{longest_path, orient, orient_ascending, DirectedGraph, Error, LongestPath, WeightMatrix};

fn matrix(rows: &[&[f64]]) -> WeightMatrix<f64> {
    WeightMatrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn network_matrix() -> WeightMatrix<f64> {
    matrix(&[
        &[0., 1., 2., 0., 2., 0., 0., 0., 0., 0., 0., 0.],
        &[1., 0., 0., 3., 4., 0., 0., 0., 0., 0., 0., 0.],
        &[2., 0., 0., 0., 0., 4., 0., 0., 5., 0., 0., 0.],
        &[0., 3., 0., 0., 5., 0., 4., 0., 0., 0., 0., 0.],
        &[2., 4., 0., 5., 0., 0., 0., 5., 0., 0., 0., 0.],
        &[0., 0., 4., 0., 0., 0., 0., 2., 0., 0., 0., 0.],
        &[0., 0., 0., 4., 0., 0., 0., 4., 0., 5., 0., 0.],
        &[0., 0., 0., 0., 5., 2., 4., 0., 3., 0., 0., 5.],
        &[0., 0., 5., 0., 0., 0., 0., 3., 0., 0., 4., 0.],
        &[0., 0., 0., 0., 0., 0., 5., 0., 0., 0., 0., 6.],
        &[0., 0., 0., 0., 0., 0., 0., 0., 4., 0., 0., 7.],
        &[0., 0., 0., 0., 0., 0., 0., 5., 0., 6., 7., 0.],
    ])
}

#[test]
fn test_orient_two_vertices() {
    let graph = orient(&matrix(&[&[0., 5.], &[5., 0.]])).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_edge_weight(1, 2), Some(5.0));
    assert_eq!(graph.get_edge_weight(2, 1), Some(5.0));
    assert!(!graph.has_vertex(0));
    assert!(!graph.has_edge(1, 1));
    assert!(!graph.has_edge(2, 2));
}

#[test]
fn test_two_cycle_is_detected() {
    let graph = orient(&matrix(&[&[0., 5.], &[5., 0.]])).unwrap();
    let err = longest_path(&graph).unwrap_err();
    assert_eq!(err, Error::CycleDetected { unresolved: 2 });
}

#[test]
fn test_orient_expands_every_edge_both_ways() {
    let m = network_matrix();
    let graph = orient(&m).unwrap();
    let edges = undirected_edges(&m).unwrap();

    assert_eq!(edges.len(), 18);
    assert_eq!(graph.edge_count(), 2 * edges.len());
    for UndirectedEdge { low, high, weight } in edges {
        assert_eq!(graph.get_edge_weight(low + 1, high + 1), Some(weight));
        assert_eq!(graph.get_edge_weight(high + 1, low + 1), Some(weight));
    }
    for (from, to, _) in graph.edges() {
        assert_ne!(from, to, "self-loop in oriented graph");
    }
    assert_eq!(graph.vertices().collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_orient_ignores_diagonal() {
    let graph = orient(&matrix(&[&[4., 1., 0.], &[1., 7., 0.], &[0., 0., 3.]])).unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.outgoing_edges(3).count(), 0);
}

#[test]
fn test_orient_rejects_asymmetric_matrix() {
    let m = matrix(&[&[0., 1., 2.], &[1., 0., 4.], &[3., 4., 0.]]);
    assert_eq!(orient(&m).unwrap_err(), Error::AsymmetricMatrix { row: 0, col: 2 });
    assert!(orient_ascending(&m).is_err());
}

#[test]
fn test_orient_rejects_negative_weight() {
    let m = matrix(&[&[0., -1.], &[-1., 0.]]);
    assert_eq!(orient(&m).unwrap_err(), Error::NegativeWeight { row: 0, col: 1 });
}

#[test]
fn test_edgeless_matrix_gives_single_vertex_path() {
    let graph = orient(&WeightMatrix::<f64>::empty(3)).unwrap();
    let path = longest_path(&graph).unwrap();
    assert_eq!(path.vertices, vec![1]);
    assert_eq!(path.weight, 0.0);
}

#[test]
fn test_empty_graph_gives_empty_path() {
    let graph: DirectedGraph<f64> = DirectedGraph::new();
    let path = longest_path(&graph).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.weight, 0.0);
}

#[test]
fn test_ascending_orientation_of_triangle() {
    let graph = orient_ascending(&matrix(&[&[0., 1., 2.], &[1., 0., 4.], &[2., 4., 0.]])).unwrap();
    assert_eq!(graph.edge_count(), 3);

    let path = longest_path(&graph).unwrap();
    assert_eq!(path.vertices, vec![1, 2, 3]);
    assert_eq!(path.weight, 5.0);
}

#[test]
fn test_ascending_orientation_of_network() {
    let graph = orient_ascending(&network_matrix()).unwrap();
    let path = longest_path(&graph).unwrap();

    assert_eq!(path.vertices, vec![1, 2, 4, 5, 8, 9, 11, 12]);
    assert_eq!(path.weight, 28.0);

    let summed: f64 = path
        .edges()
        .map(|(u, v)| graph.get_edge_weight(u, v).unwrap())
        .sum();
    assert_eq!(summed, path.weight);
}

#[test]
fn test_heavier_branch_wins() {
    // 1 -> 2 -> 4 weighs 3, 1 -> 3 -> 4 weighs 11
    let mut graph = DirectedGraph::with_vertices(1..=4);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 4, 2.0);
    graph.add_edge(1, 3, 1.0);
    graph.add_edge(3, 4, 10.0);

    let path = LongestPath::new().compute(&graph).unwrap();
    assert_eq!(path.vertices, vec![1, 3, 4]);
    assert_eq!(path.weight, 11.0);
    assert!(path.contains_edge(3, 4));
    assert!(!path.contains_edge(2, 4));
}

#[test]
fn test_longer_cycle_is_detected() {
    let mut graph = DirectedGraph::with_vertices(1..=5);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(3, 4, 1.0);
    graph.add_edge(4, 2, 1.0);
    graph.add_edge(4, 5, 1.0);

    // 2, 3, 4 form the cycle and 5 sits behind it
    assert_eq!(longest_path(&graph).unwrap_err(), Error::CycleDetected { unresolved: 4 });
}

#[test]
fn test_directed_graph_refuses_self_loops_and_unknown_vertices() {
    let mut graph = DirectedGraph::with_vertices(1..=2);
    assert!(!graph.add_edge(1, 1, 3.0));
    assert!(!graph.add_edge(1, 9, 3.0));
    assert!(!graph.add_edge(1, 2, -3.0));
    assert!(graph.add_edge(1, 2, 3.0));
    assert!(graph.add_edge(1, 2, 4.0));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(1, 2), Some(4.0));
    assert_eq!(graph.incoming_edges(2).collect::<Vec<_>>(), vec![(1, 4.0)]);
    assert!(graph.validate_non_negative());
}

#[test]
fn test_topological_order_prefers_smallest_label() {
    let mut graph = DirectedGraph::with_vertices([3, 5, 7, 9]);
    graph.add_edge(9, 3, 1.0);
    graph.add_edge(5, 3, 1.0);

    assert_eq!(topological_order(&graph).unwrap(), vec![5, 7, 9, 3]);
}

#[test]
fn test_random_ascending_orientations_are_acyclic() {
    for seed in 0..6 {
        let m = seeded_symmetric_matrix(seed, 30, 0.2, 9);
        let graph = orient_ascending(&m).unwrap();
        let path = longest_path(&graph).unwrap();

        let mut previous = 0;
        for &v in &path.vertices {
            assert!(v > previous, "labels must increase along an ascending path");
            previous = v;
        }
        assert!(orient(&m).map(|g| g.edge_count()).unwrap() == 2 * graph.edge_count());
    }
}

#[test]
fn test_vertex_costs_fold_into_oriented_edges() {
    let m = matrix(&[&[0., 1., 2.], &[1., 0., 4.], &[2., 4., 0.]]);
    let costs = [1.0, 2.0, 3.0];

    // 1 -> 2 -> 3 weighs (1 + 2) + (4 + 3), 1 -> 3 only 2 + 3
    let ascending = fold_vertex_costs(&orient_ascending(&m).unwrap(), &costs).unwrap();
    let path = longest_path(&ascending).unwrap();
    assert_eq!(path.vertices, vec![1, 2, 3]);
    assert_eq!(path.weight, 10.0);

    let both_ways = fold_vertex_costs(&orient(&m).unwrap(), &costs).unwrap();
    assert_eq!(both_ways.edge_count(), 6);
    assert_eq!(both_ways.get_edge_weight(1, 2), Some(3.0));
    assert_eq!(both_ways.get_edge_weight(2, 1), Some(2.0));

    assert_eq!(
        fold_vertex_costs(&ascending, &[1.0, 2.0]).unwrap_err(),
        Error::CostVectorLength { expected: 3, len: 2 }
    );
    assert_eq!(
        fold_vertex_costs(&ascending, &[1.0, -2.0, 3.0]).unwrap_err(),
        Error::InvalidVertexCost { vertex: 1 }
    );
}
