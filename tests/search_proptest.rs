//! Property tests for the searches, checked against petgraph's shortest distances.

use std::collections::HashSet;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use wayfinder::{
    reachable_from, shortest_path, DirectedGraph, GraphSearch, Path, SearchStrategy,
    TraversalStrategy, Vertex,
};

/// A random digraph: vertex count plus an edge list (loops and repeats allowed).
fn digraph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..8).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..20)))
}

fn build(n: usize, edges: &[(usize, usize)]) -> (DirectedGraph<usize>, Vec<Vertex<usize>>) {
    let vertices: Vec<_> = (0..n).map(Vertex::new).collect();
    let mut g = DirectedGraph::with_capacity(n);
    for v in &vertices {
        g.add_vertex(v.clone()).unwrap();
    }
    for &(a, b) in edges {
        g.add_edge(&vertices[a], &vertices[b]).unwrap();
    }
    (g, vertices)
}

fn reference(n: usize, edges: &[(usize, usize)]) -> (DiGraph<(), ()>, Vec<NodeIndex>) {
    let mut pg = DiGraph::new();
    let nodes: Vec<_> = (0..n).map(|_| pg.add_node(())).collect();
    for &(a, b) in edges {
        pg.add_edge(nodes[a], nodes[b], ());
    }
    (pg, nodes)
}

fn assert_simple_walk(
    g: &DirectedGraph<usize>,
    path: &Path<usize>,
    start: &Vertex<usize>,
    end: &Vertex<usize>,
) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(end));
    for pair in path.vertices().windows(2) {
        assert!(g.has_edge(&pair[0], &pair[1]), "path uses a missing edge");
    }
    let distinct: HashSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path repeats a vertex");
}

proptest! {
    #[test]
    fn strategies_agree_on_length(
        (n, edges) in digraph(),
        picks in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let (g, v) = build(n, &edges);
        let (pg, nodes) = reference(n, &edges);
        let (s, e) = (picks.0.index(n), picks.1.index(n));

        let distances = dijkstra(&pg, nodes[s], None, |_| 1usize);
        let expected = distances.get(&nodes[e]).copied();

        for strategy in [
            SearchStrategy::RecursiveDfs,
            SearchStrategy::IterativeDfs,
            SearchStrategy::Bfs,
        ] {
            let found = shortest_path(&g, &v[s], &v[e], strategy).unwrap();
            prop_assert_eq!(found.as_ref().map(Path::edge_count), expected, "{:?}", strategy);
            if let Some(path) = &found {
                assert_simple_walk(&g, path, &v[s], &v[e]);
            }
        }
    }

    #[test]
    fn no_path_iff_unreachable(
        (n, edges) in digraph(),
        picks in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let (g, v) = build(n, &edges);
        let (s, e) = (picks.0.index(n), picks.1.index(n));

        let reachable = reachable_from(&g, &v[s]).unwrap();
        let path = shortest_path(&g, &v[s], &v[e], SearchStrategy::Bfs).unwrap();
        prop_assert_eq!(path.is_none(), !reachable.contains(&v[e]));
    }

    #[test]
    fn traversals_agree_and_include_start(
        (n, edges) in digraph(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (g, v) = build(n, &edges);
        let (pg, nodes) = reference(n, &edges);
        let s = pick.index(n);
        let search = GraphSearch::new(&g);

        let expected: HashSet<usize> = dijkstra(&pg, nodes[s], None, |_| 1usize)
            .keys()
            .map(|idx| idx.index())
            .collect();

        for strategy in [
            TraversalStrategy::RecursiveDfs,
            TraversalStrategy::IterativeDfs,
            TraversalStrategy::Bfs,
        ] {
            let reachable = search.reachable_from_with(&v[s], strategy).unwrap();
            prop_assert!(reachable.contains(&v[s]));
            let payloads: HashSet<usize> = reachable.iter().map(|x| *x.payload()).collect();
            prop_assert_eq!(&payloads, &expected, "{:?}", strategy);
        }
    }

    #[test]
    fn concatenation_preserves_both_sides(split in 0usize..6, total in 0usize..6) {
        let vertices: Vec<_> = (0..split + total).map(Vertex::new).collect();
        let left: Path<usize> = vertices[..split].iter().cloned().collect();
        let right: Path<usize> = vertices[split..].iter().cloned().collect();

        let joined = &left + &right;
        prop_assert_eq!(joined.len(), left.len() + right.len());
        prop_assert_eq!(joined.vertices(), vertices.as_slice());
    }
}
