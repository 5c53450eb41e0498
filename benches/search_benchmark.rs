use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wayfinder::{DirectedGraph, GraphSearch, SearchStrategy, TraversalStrategy, Vertex};

/// A `width x height` grid with right and down edges plus a back edge per row.
fn grid(width: usize, height: usize) -> (DirectedGraph<usize>, Vec<Vertex<usize>>) {
    let vertices: Vec<_> = (0..width * height).map(Vertex::new).collect();
    let mut graph = DirectedGraph::with_capacity(vertices.len());
    for v in &vertices {
        graph.add_vertex(v.clone()).unwrap();
    }
    for row in 0..height {
        for col in 0..width {
            let here = row * width + col;
            if col + 1 < width {
                graph.add_edge(&vertices[here], &vertices[here + 1]).unwrap();
            }
            if row + 1 < height {
                graph.add_edge(&vertices[here], &vertices[here + width]).unwrap();
            }
        }
        // Cycle back to the row start.
        graph
            .add_edge(&vertices[row * width + width - 1], &vertices[row * width])
            .unwrap();
    }
    (graph, vertices)
}

/// A long chain, deep enough to exercise the iterative variants.
fn chain(n: usize) -> (DirectedGraph<usize>, Vec<Vertex<usize>>) {
    let vertices: Vec<_> = (0..n).map(Vertex::new).collect();
    let mut graph = DirectedGraph::with_capacity(n);
    for v in &vertices {
        graph.add_vertex(v.clone()).unwrap();
    }
    for pair in vertices.windows(2) {
        graph.add_edge(&pair[0], &pair[1]).unwrap();
    }
    (graph, vertices)
}

fn bench_shortest_path(c: &mut Criterion) {
    let (graph, vertices) = grid(4, 4);
    let search = GraphSearch::new(&graph);
    let (start, end) = (&vertices[0], &vertices[vertices.len() - 1]);

    c.bench_function("grid_bfs_shortest_path", |b| {
        b.iter(|| black_box(search.shortest_path_with(start, end, SearchStrategy::Bfs).unwrap()))
    });

    c.bench_function("grid_iterative_dfs_shortest_path", |b| {
        b.iter(|| {
            black_box(
                search
                    .shortest_path_with(start, end, SearchStrategy::IterativeDfs)
                    .unwrap(),
            )
        })
    });

    c.bench_function("grid_recursive_dfs_shortest_path", |b| {
        b.iter(|| {
            black_box(
                search
                    .shortest_path_with(start, end, SearchStrategy::RecursiveDfs)
                    .unwrap(),
            )
        })
    });
}

fn bench_reachability(c: &mut Criterion) {
    let (graph, vertices) = chain(2_000);
    let search = GraphSearch::new(&graph);
    let start = &vertices[0];

    c.bench_function("chain_iterative_dfs_reachability", |b| {
        b.iter(|| {
            black_box(
                search
                    .reachable_from_with(start, TraversalStrategy::IterativeDfs)
                    .unwrap(),
            )
        })
    });

    c.bench_function("chain_bfs_reachability", |b| {
        b.iter(|| black_box(search.reachable_from_with(start, TraversalStrategy::Bfs).unwrap()))
    });

    c.bench_function("chain_recursive_dfs_reachability", |b| {
        b.iter(|| {
            black_box(
                search
                    .reachable_from_with(start, TraversalStrategy::RecursiveDfs)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_shortest_path, bench_reachability);
criterion_main!(benches);
