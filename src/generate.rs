//! Deterministic constructors for classic graph families, plus one
//! randomized generator (`erdos_renyi_gnp`).
//!
//! Every generator produces `Graph<usize, (), u32>`: unit node payloads,
//! unit edge weight. Node ids are consecutive integers starting at 0.
//! Generators take `i64` size arguments (rather than `usize`) specifically
//! so that `n < 0` is representable and yields `InvalidArgument`, per §7.

use rand::Rng;

use crate::error::GraphError;
use crate::graph::{Graph, MissingEndpointPolicy, Orientation};

type GenGraph = Graph<usize, (), u32>;
type GenResult = Result<GenGraph, GraphError<usize>>;

fn non_negative_size(n: i64, what: &str) -> Result<usize, GraphError<usize>> {
    if n < 0 {
        return Err(GraphError::InvalidArgument(format!("{what} must be non-negative, got {n}")));
    }
    Ok(n as usize)
}

fn empty_graph_with(orientation: Orientation, n: usize) -> GenGraph {
    let mut g = Graph::with_policy(orientation, MissingEndpointPolicy::Error);
    for id in 0..n {
        g.add_node(id, ());
    }
    g
}

/// `n` nodes, no edges.
pub fn empty(n: i64) -> GenResult {
    let n = non_negative_size(n, "n")?;
    Ok(empty_graph_with(Orientation::Undirected, n))
}

/// All `n(n-1)/2` undirected edges between distinct nodes.
pub fn complete(n: i64) -> GenResult {
    complete_with_type(n, Orientation::Undirected)
}

/// `complete`, but with an explicit orientation. Directed graphs get both
/// `(i, j)` and `(j, i)` for every pair, i.e. `n(n-1)` edges.
pub fn complete_with_type(n: i64, orientation: Orientation) -> GenResult {
    let n = non_negative_size(n, "n")?;
    let mut g = empty_graph_with(orientation, n);
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(i, j, 1).expect("endpoints were just inserted");
            if orientation == Orientation::Directed {
                g.add_edge(j, i, 1).expect("endpoints were just inserted");
            }
        }
    }
    Ok(g)
}

/// `n` nodes in a ring, `n >= 3`; fewer than 3 nodes (including negative `n`)
/// yields an empty graph with zero nodes.
pub fn cycle(n: i64) -> GenResult {
    if n < 3 {
        return Ok(empty_graph_with(Orientation::Undirected, 0));
    }
    let n = n as usize;
    let mut g = empty_graph_with(Orientation::Undirected, n);
    for i in 0..n {
        g.add_edge(i, (i + 1) % n, 1).expect("endpoints were just inserted");
    }
    Ok(g)
}

/// `n` nodes in a line: edges `(i, i+1)` for `0 <= i < n-1`.
pub fn path(n: i64) -> GenResult {
    let n = non_negative_size(n, "n")?;
    let mut g = empty_graph_with(Orientation::Undirected, n);
    for i in 0..n.saturating_sub(1) {
        g.add_edge(i, i + 1, 1).expect("endpoints were just inserted");
    }
    Ok(g)
}

/// Node 0 connected to every other node.
pub fn star(n: i64) -> GenResult {
    let n = non_negative_size(n, "n")?;
    let mut g = empty_graph_with(Orientation::Undirected, n);
    for i in 1..n {
        g.add_edge(0, i, 1).expect("endpoints were just inserted");
    }
    Ok(g)
}

/// `star(n)` with a cycle added over the rim nodes `{1..n-1}`.
pub fn wheel(n: i64) -> GenResult {
    let n_usize = non_negative_size(n, "n")?;
    let mut g = star(n)?;
    if n_usize >= 2 {
        let rim = (n_usize - 1) as i64;
        if rim >= 3 {
            for i in 1..n_usize {
                let next = 1 + (i % (n_usize - 1));
                if !g.has_edge(&i, &next) {
                    g.add_edge(i, next, 1).expect("endpoints were just inserted");
                }
            }
        }
    }
    Ok(g)
}

/// `a` left nodes `0..a`, `b` right nodes `a..a+b`, every left-right pair
/// connected.
pub fn complete_bipartite(a: i64, b: i64) -> GenResult {
    let a = non_negative_size(a, "a")?;
    let b = non_negative_size(b, "b")?;
    let mut g = empty_graph_with(Orientation::Undirected, a + b);
    for i in 0..a {
        for j in a..(a + b) {
            g.add_edge(i, j, 1).expect("endpoints were just inserted");
        }
    }
    Ok(g)
}

/// A complete binary tree of the given `depth`: `2^(depth+1) - 1` nodes,
/// node `i`'s children are `2i+1` and `2i+2`.
pub fn binary_tree(depth: i64) -> GenResult {
    let depth = non_negative_size(depth, "depth")?;
    let n = (1usize << (depth + 1)) - 1;
    let mut g = empty_graph_with(Orientation::Undirected, n);
    for i in 0..n {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < n {
                g.add_edge(i, child, 1).expect("endpoints were just inserted");
            }
        }
    }
    Ok(g)
}

/// A 4-connected `w` by `h` lattice; node `(x, y) -> y * w + x`.
pub fn grid_2d(w: i64, h: i64) -> GenResult {
    let w = non_negative_size(w, "w")?;
    let h = non_negative_size(h, "h")?;
    let mut g = empty_graph_with(Orientation::Undirected, w * h);
    let index = |x: usize, y: usize| y * w + x;
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                g.add_edge(index(x, y), index(x + 1, y), 1).expect("endpoints were just inserted");
            }
            if y + 1 < h {
                g.add_edge(index(x, y), index(x, y + 1), 1).expect("endpoints were just inserted");
            }
        }
    }
    Ok(g)
}

/// The Petersen graph: outer pentagon `0-4`, inner pentagram `5-9`, spokes
/// `i <-> i+5`.
pub fn petersen() -> GenGraph {
    let mut g = empty_graph_with(Orientation::Undirected, 10);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5, 1).expect("endpoints were just inserted");
    }
    for i in 0..5 {
        g.add_edge(5 + i, 5 + (i + 2) % 5, 1).expect("endpoints were just inserted");
    }
    for i in 0..5 {
        g.add_edge(i, i + 5, 1).expect("endpoints were just inserted");
    }
    g
}

/// `n` nodes, each possible undirected edge present independently with
/// probability `p` (via `rand::thread_rng`). The crate's one intentionally
/// nondeterministic generator.
pub fn erdos_renyi_gnp(n: i64, p: f64) -> GenResult {
    let n = non_negative_size(n, "n")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidArgument(format!("p must be in [0, 1], got {p}")));
    }
    let mut g = empty_graph_with(Orientation::Undirected, n);
    let mut rng = rand::thread_rng();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(i, j, 1).expect("endpoints were just inserted");
            }
        }
    }
    Ok(g)
}

/// `n` nodes; for `i < j`, include directed edge `(i, j)` iff
/// `(31*i + 17*j + seed) mod 10 < 3`. Specified exactly so tests can rely on
/// it for deterministic graph construction.
pub fn random_dag(n: i64, seed: i64) -> GenResult {
    let n = non_negative_size(n, "n")?;
    let mut g = empty_graph_with(Orientation::Directed, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let score = 31 * i as i64 + 17 * j as i64 + seed;
            if score.rem_euclid(10) < 3 {
                g.add_edge(i, j, 1).expect("endpoints were just inserted");
            }
        }
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_k5() {
        let g = complete(5).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 20); // 10 undirected pairs, stored both ways
        for i in 0..5 {
            assert_eq!(g.successors(&i).unwrap().count(), 4);
        }
    }

    #[test]
    fn complete_directed_has_n_times_n_minus_1_edges() {
        let g = complete_with_type(4, Orientation::Directed).unwrap();
        assert_eq!(g.edge_count(), 12);
    }

    #[test]
    fn star_s6_leaf_degree() {
        let g = star(6).unwrap();
        assert_eq!(g.successors(&0).unwrap().count(), 5);
        for leaf in 1..6 {
            assert_eq!(g.successors(&leaf).unwrap().count(), 1);
        }
    }

    #[test]
    fn cycle_requires_at_least_three_nodes() {
        let g = cycle(2).unwrap();
        assert_eq!(g.node_count(), 0);

        let g = cycle(3).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn path_has_n_minus_1_edges() {
        let g = path(4).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 6); // 3 undirected edges, stored both ways
    }

    #[test]
    fn wheel_is_star_plus_rim_cycle() {
        let g = wheel(6).unwrap();
        assert_eq!(g.node_count(), 6);
        assert_eq!(g.successors(&0).unwrap().count(), 5);
        // Every rim node connects to the hub plus two rim neighbours.
        for rim in 1..6 {
            assert_eq!(g.successors(&rim).unwrap().count(), 3);
        }
    }

    #[test]
    fn complete_bipartite_counts() {
        let g = complete_bipartite(2, 3).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.successors(&0).unwrap().count(), 3);
        assert_eq!(g.successors(&2).unwrap().count(), 2);
    }

    #[test]
    fn binary_tree_node_count_and_children() {
        let g = binary_tree(2).unwrap();
        assert_eq!(g.node_count(), 7);
        assert!(g.has_edge(&0, &1));
        assert!(g.has_edge(&0, &2));
        assert!(g.has_edge(&1, &3));
        assert!(g.has_edge(&1, &4));
    }

    #[test]
    fn grid_2d_3x3_degrees() {
        let g = grid_2d(3, 3).unwrap();
        assert_eq!(g.node_count(), 9);
        assert_eq!(g.successors(&0).unwrap().count(), 2); // corner
        assert_eq!(g.successors(&4).unwrap().count(), 4); // center
    }

    #[test]
    fn petersen_is_3_regular() {
        let g = petersen();
        assert_eq!(g.node_count(), 10);
        for i in 0..10 {
            assert_eq!(g.successors(&i).unwrap().count(), 3);
        }
    }

    #[test]
    fn empty_has_no_edges() {
        let g = empty(5).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn negative_size_is_invalid_argument() {
        assert!(matches!(complete(-1), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(grid_2d(-1, 3), Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn erdos_renyi_p_zero_is_empty_p_one_is_complete() {
        let g0 = erdos_renyi_gnp(5, 0.0).unwrap();
        assert_eq!(g0.edge_count(), 0);

        let g1 = erdos_renyi_gnp(5, 1.0).unwrap();
        assert_eq!(g1.edge_count(), 20);
    }

    #[test]
    fn erdos_renyi_rejects_out_of_range_probability() {
        assert!(matches!(erdos_renyi_gnp(5, 1.5), Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn random_dag_is_deterministic_and_follows_the_formula() {
        let g = random_dag(5, 42).unwrap();
        for i in 0..5usize {
            for j in (i + 1)..5usize {
                let expected = (31 * i as i64 + 17 * j as i64 + 42).rem_euclid(10) < 3;
                assert_eq!(g.has_edge(&i, &j), expected);
            }
        }
        let g2 = random_dag(5, 42).unwrap();
        for i in 0..5usize {
            for j in (i + 1)..5usize {
                assert_eq!(g.has_edge(&i, &j), g2.has_edge(&i, &j));
            }
        }
    }
}
