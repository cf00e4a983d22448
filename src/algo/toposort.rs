//! Kahn's algorithm with an ascending-id tie-break, for deterministic output.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::Graph;

/// Topologically sort `g`.
///
/// Ties among zero-in-degree nodes are broken in ascending `Id` order, so the
/// result is deterministic for a given graph. Returns `CycleDetected` if `g`
/// has at least one directed cycle (a self-loop counts as one).
pub fn topological_sort<Id, N, W>(g: &Graph<Id, N, W>) -> Result<Vec<Id>, GraphError<Id>>
where
    Id: Clone + Eq + Hash + Ord + Debug,
{
    let mut in_degree: HashMap<Id, usize> = HashMap::new();
    for id in g.all_nodes() {
        in_degree.entry(id.clone()).or_insert(0);
        for (succ, _) in g.successors(id)? {
            *in_degree.entry(succ.clone()).or_insert(0) += 1;
        }
    }

    let mut ready: BinaryHeap<Reverse<Id>> = in_degree
        .iter()
        .filter(|(_, &deg)| deg == 0)
        .map(|(id, _)| Reverse(id.clone()))
        .collect();

    let mut order = Vec::with_capacity(g.node_count());
    while let Some(Reverse(node)) = ready.pop() {
        order.push(node.clone());
        for (succ, _) in g.successors(&node)? {
            let degree = in_degree.get_mut(succ).expect("successor must have an in-degree entry");
            *degree -= 1;
            if *degree == 0 {
                ready.push(Reverse(succ.clone()));
            }
        }
    }

    if order.len() == g.node_count() {
        Ok(order)
    } else {
        Err(GraphError::CycleDetected)
    }
}
