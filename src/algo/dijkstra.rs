//! Dijkstra's shortest-path algorithm, generic over an injected
//! `(zero, add, compare)` triple instead of requiring `W: Ord + Add`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::Graph;

/// A small binary min-heap keyed by an injected comparator, for score types
/// that aren't `Ord` but still have a total order via `compare`.
struct ScoredHeap<Id, W, C> {
    entries: Vec<(W, Id)>,
    compare: C,
}

impl<Id, W, C> ScoredHeap<Id, W, C>
where
    C: Fn(&W, &W) -> Ordering,
{
    fn new(compare: C) -> Self {
        ScoredHeap {
            entries: Vec::new(),
            compare,
        }
    }

    fn push(&mut self, score: W, id: Id) {
        self.entries.push((score, id));
        let mut i = self.entries.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.compare)(&self.entries[i].0, &self.entries[parent].0) == Ordering::Less {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn pop(&mut self) -> Option<(W, Id)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let popped = self.entries.pop();

        let mut i = 0;
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < len
                && (self.compare)(&self.entries[left].0, &self.entries[smallest].0) == Ordering::Less
            {
                smallest = left;
            }
            if right < len
                && (self.compare)(&self.entries[right].0, &self.entries[smallest].0) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }

        popped
    }
}

/// The shortest path from `from` to `to` in `g`, together with its total cost.
///
/// `zero` is the additive identity for `W`, `add` combines two edge costs
/// (associative, monotonic: adding a non-negative weight never decreases
/// distance), and `compare` gives `W` a total order compatible with `add`.
/// All edge weights must be non-negative under `compare` relative to `zero`;
/// violating this yields an unspecified (but not panicking) result.
pub fn shortest_path<Id, N, W>(
    g: &Graph<Id, N, W>,
    from: &Id,
    to: &Id,
    zero: W,
    add: impl Fn(&W, &W) -> W,
    compare: impl Fn(&W, &W) -> Ordering,
) -> Result<(Vec<Id>, W), GraphError<Id>>
where
    Id: Clone + Eq + Hash + Debug,
    W: Clone,
{
    if !g.has_node(from) {
        return Err(GraphError::MissingNode(from.clone()));
    }
    if !g.has_node(to) {
        return Err(GraphError::MissingNode(to.clone()));
    }

    let mut best: HashMap<Id, W> = HashMap::new();
    let mut predecessor: HashMap<Id, Id> = HashMap::new();
    let mut heap = ScoredHeap::new(&compare);

    best.insert(from.clone(), zero.clone());
    heap.push(zero, from.clone());

    while let Some((node_cost, node)) = heap.pop() {
        if let Some(current_best) = best.get(&node) {
            if compare(&node_cost, current_best) == Ordering::Greater {
                continue; // stale heap entry
            }
        }

        if node == *to {
            let path = reconstruct_path(from, to, &predecessor);
            return Ok((path, node_cost));
        }

        for (next, weight) in g.successors(&node)? {
            let next_cost = add(&node_cost, weight);
            let improves = match best.get(next) {
                Some(current) => compare(&next_cost, current) == Ordering::Less,
                None => true,
            };
            if improves {
                best.insert(next.clone(), next_cost.clone());
                predecessor.insert(next.clone(), node.clone());
                heap.push(next_cost, next.clone());
            }
        }
    }

    Err(GraphError::NotFound {
        from: from.clone(),
        to: to.clone(),
    })
}

fn reconstruct_path<Id: Clone + Eq + Hash>(
    from: &Id,
    to: &Id,
    predecessor: &HashMap<Id, Id>,
) -> Vec<Id> {
    let mut path = vec![to.clone()];
    let mut current = to;
    while current != from {
        let prev = predecessor.get(current).expect("path exists, predecessors are complete");
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_graph() -> Graph<u32, (), i64> {
        // A --10--> B --1--> C, A --5--> C (cheaper path via C).
        let mut g: Graph<u32, (), i64> = Graph::directed();
        for id in [1, 2, 3] {
            g.add_node(id, ());
        }
        g.add_edge(1, 2, 10).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g.add_edge(1, 3, 5).unwrap();
        g
    }

    fn add(a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn cmp(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn finds_cheapest_path() {
        let g = weighted_graph();
        let (path, cost) = shortest_path(&g, &1, &3, 0, add, cmp).unwrap();
        assert_eq!(path, vec![1, 3]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn path_to_self_is_trivial() {
        let g = weighted_graph();
        let (path, cost) = shortest_path(&g, &1, &1, 0, add, cmp).unwrap();
        assert_eq!(path, vec![1]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn unreachable_returns_not_found() {
        let mut g = weighted_graph();
        g.add_node(4, ());
        let err = shortest_path(&g, &1, &4, 0, add, cmp).unwrap_err();
        assert_eq!(
            err,
            GraphError::NotFound { from: 1, to: 4 }
        );
    }

    #[test]
    fn missing_endpoint_errors() {
        let g = weighted_graph();
        assert_eq!(
            shortest_path(&g, &1, &99, 0, add, cmp).unwrap_err(),
            GraphError::MissingNode(99)
        );
    }

    #[test]
    fn grid_3x3_corner_to_corner() {
        let g = crate::generate::grid_2d(3, 3).unwrap();
        let add_u32 = |a: &u32, b: &u32| a + b;
        let cmp_u32 = |a: &u32, b: &u32| a.cmp(b);
        let (path, cost) = shortest_path(&g, &0usize, &8usize, 0u32, add_u32, cmp_u32).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(path.len(), 5);
        assert_eq!(*path.first().unwrap(), 0);
        assert_eq!(*path.last().unwrap(), 8);
    }
}
