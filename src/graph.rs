//! The core graph container: a directed-or-undirected multigraph-free graph
//! with arbitrary node payloads and edge weights, keyed by a user-supplied id.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::GraphError;

/// Whether a graph's edges are one-way or symmetric.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Edges `(u, v)` are distinct from `(v, u)`.
    Directed,
    /// Every edge is stored in both directions with identical weight.
    Undirected,
}

/// What `add_edge` should do when an endpoint isn't in the graph yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum MissingEndpointPolicy {
    /// Return `GraphError::MissingNode` (the default).
    #[default]
    Error,
    /// Insert the missing endpoint(s) with `N::default()` before adding the edge.
    AutoInsert,
}

/// A directed or undirected graph with node payloads `N` and edge weights `W`,
/// keyed by node identifiers of type `Id`.
///
/// Nodes and their adjacency are stored in insertion-ordered maps so that
/// enumeration order (`all_nodes`, `successors`, `predecessors`) is stable and
/// reproducible for a given sequence of edits.
#[derive(Clone, Debug)]
pub struct Graph<Id, N, W> {
    orientation: Orientation,
    policy: MissingEndpointPolicy,
    nodes: IndexMap<Id, N>,
    out_edges: IndexMap<Id, IndexMap<Id, W>>,
    in_edges: IndexMap<Id, IndexMap<Id, W>>,
}

impl<Id, N, W> Graph<Id, N, W>
where
    Id: Clone + Eq + Hash,
{
    /// An empty directed graph with the default (`Error`) missing-endpoint policy.
    pub fn directed() -> Self {
        Self::with_policy(Orientation::Directed, MissingEndpointPolicy::default())
    }

    /// An empty undirected graph with the default (`Error`) missing-endpoint policy.
    pub fn undirected() -> Self {
        Self::with_policy(Orientation::Undirected, MissingEndpointPolicy::default())
    }

    /// An empty graph with an explicit orientation and missing-endpoint policy.
    pub fn with_policy(orientation: Orientation, policy: MissingEndpointPolicy) -> Self {
        Graph {
            orientation,
            policy,
            nodes: IndexMap::new(),
            out_edges: IndexMap::new(),
            in_edges: IndexMap::new(),
        }
    }

    /// The graph's orientation, fixed at construction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The graph's missing-endpoint policy.
    pub fn policy(&self) -> MissingEndpointPolicy {
        self.policy
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edge entries (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.out_edges.values().map(IndexMap::len).sum()
    }

    /// Remove every node and edge, keeping orientation and policy.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.out_edges.clear();
        self.in_edges.clear();
    }

    /// Insert or replace a node's payload. Replacing a node preserves its
    /// incident edges. Returns the previous payload, if any.
    pub fn add_node(&mut self, id: Id, data: N) -> Option<N> {
        let previous = self.nodes.insert(id.clone(), data);
        self.out_edges.entry(id.clone()).or_default();
        self.in_edges.entry(id).or_default();
        previous
    }

    /// Remove a node and every edge incident to it, on both sides. Returns
    /// the removed payload, if the node existed.
    pub fn remove_node(&mut self, id: &Id) -> Option<N> {
        let data = self.nodes.shift_remove(id)?;

        if let Some(outs) = self.out_edges.shift_remove(id) {
            for (target, _) in outs {
                if let Some(preds) = self.in_edges.get_mut(&target) {
                    preds.shift_remove(id);
                }
            }
        }
        if let Some(ins) = self.in_edges.shift_remove(id) {
            for (source, _) in ins {
                if let Some(succs) = self.out_edges.get_mut(&source) {
                    succs.shift_remove(id);
                }
            }
        }

        Some(data)
    }

    /// Whether `id` is a node of this graph.
    pub fn has_node(&self, id: &Id) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: &Id, to: &Id) -> bool {
        self.out_edges
            .get(from)
            .is_some_and(|outs| outs.contains_key(to))
    }

    /// The payload of a node, if it exists.
    pub fn node_data(&self, id: &Id) -> Option<&N> {
        self.nodes.get(id)
    }

    /// Node ids, in insertion order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Id> {
        self.nodes.keys()
    }

    /// Outgoing neighbours and their weights, in insertion order.
    pub fn successors(&self, id: &Id) -> Result<impl Iterator<Item = (&Id, &W)>, GraphError<Id>>
    where
        Id: std::fmt::Debug,
    {
        if !self.has_node(id) {
            return Err(GraphError::MissingNode(id.clone()));
        }
        Ok(self
            .out_edges
            .get(id)
            .into_iter()
            .flat_map(IndexMap::iter))
    }

    /// Incoming neighbours and their weights, in insertion order.
    pub fn predecessors(&self, id: &Id) -> Result<impl Iterator<Item = (&Id, &W)>, GraphError<Id>>
    where
        Id: std::fmt::Debug,
    {
        if !self.has_node(id) {
            return Err(GraphError::MissingNode(id.clone()));
        }
        Ok(self.in_edges.get(id).into_iter().flat_map(IndexMap::iter))
    }

    /// Remove the directed edge `from -> to` (and, if undirected, `to -> from`
    /// too). Returns the removed weight.
    pub fn remove_edge(&mut self, from: &Id, to: &Id) -> Option<W> {
        let weight = self
            .out_edges
            .get_mut(from)
            .and_then(|outs| outs.shift_remove(to));
        if weight.is_some() {
            if let Some(preds) = self.in_edges.get_mut(to) {
                preds.shift_remove(from);
            }
            if self.orientation == Orientation::Undirected && to != from {
                if let Some(outs) = self.out_edges.get_mut(to) {
                    outs.shift_remove(from);
                }
                if let Some(preds) = self.in_edges.get_mut(from) {
                    preds.shift_remove(to);
                }
            }
        }
        weight
    }
}

impl<Id, N, W> Graph<Id, N, W>
where
    Id: Clone + Eq + Hash + std::fmt::Debug,
    W: Clone,
{
    /// Add the edge `from -> to` with the given weight (and, if undirected,
    /// the symmetric `to -> from` entry, written atomically with it).
    ///
    /// Under `MissingEndpointPolicy::Error` (the default), both endpoints
    /// must already exist. Under `AutoInsert`, missing endpoints are
    /// inserted with `N::default()` first.
    pub fn add_edge(&mut self, from: Id, to: Id, weight: W) -> Result<(), GraphError<Id>>
    where
        N: Default,
    {
        self.ensure_endpoints(&from, &to)?;
        self.insert_directed(from.clone(), to.clone(), weight.clone());
        if self.orientation == Orientation::Undirected && from != to {
            self.insert_directed(to, from, weight);
        }
        Ok(())
    }

    fn ensure_endpoints(&mut self, from: &Id, to: &Id) -> Result<(), GraphError<Id>>
    where
        N: Default,
    {
        match self.policy {
            MissingEndpointPolicy::Error => {
                if !self.has_node(from) {
                    return Err(GraphError::MissingNode(from.clone()));
                }
                if !self.has_node(to) {
                    return Err(GraphError::MissingNode(to.clone()));
                }
            }
            MissingEndpointPolicy::AutoInsert => {
                if !self.has_node(from) {
                    self.add_node(from.clone(), N::default());
                }
                if !self.has_node(to) {
                    self.add_node(to.clone(), N::default());
                }
            }
        }
        Ok(())
    }

    fn insert_directed(&mut self, from: Id, to: Id, weight: W) {
        self.out_edges.entry(from.clone()).or_default().insert(to.clone(), weight.clone());
        self.in_edges.entry(to).or_default().insert(from, weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_directed() -> Graph<u32, &'static str, i32> {
        let mut g = Graph::directed();
        g.add_node(1, "a");
        g.add_node(2, "b");
        g.add_node(3, "c");
        g.add_edge(1, 2, 10).unwrap();
        g.add_edge(2, 3, 20).unwrap();
        g
    }

    #[test]
    fn add_and_query_nodes() {
        let g = small_directed();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node_data(&1), Some(&"a"));
        assert!(g.has_node(&2));
        assert!(!g.has_node(&42));
    }

    #[test]
    fn successors_and_predecessors() {
        let g = small_directed();
        let succ: Vec<_> = g.successors(&1).unwrap().map(|(id, w)| (*id, *w)).collect();
        assert_eq!(succ, vec![(2, 10)]);

        let pred: Vec<_> = g.predecessors(&3).unwrap().map(|(id, w)| (*id, *w)).collect();
        assert_eq!(pred, vec![(2, 20)]);
    }

    #[test]
    fn missing_node_error_on_successors() {
        let g = small_directed();
        assert_eq!(g.successors(&99).unwrap_err(), GraphError::MissingNode(99));
    }

    #[test]
    fn add_edge_missing_endpoint_errors_by_default() {
        let mut g: Graph<u32, (), i32> = Graph::directed();
        g.add_node(1, ());
        let err = g.add_edge(1, 2, 1).unwrap_err();
        assert_eq!(err, GraphError::MissingNode(2));
    }

    #[test]
    fn add_edge_auto_insert_policy() {
        let mut g: Graph<u32, (), i32> =
            Graph::with_policy(Orientation::Directed, MissingEndpointPolicy::AutoInsert);
        g.add_node(1, ());
        g.add_edge(1, 2, 1).unwrap();
        assert!(g.has_node(&2));
        assert!(g.has_edge(&1, &2));
    }

    #[test]
    fn undirected_symmetry() {
        let mut g: Graph<u32, (), i32> = Graph::undirected();
        g.add_node(1, ());
        g.add_node(2, ());
        g.add_edge(1, 2, 5).unwrap();

        assert!(g.has_edge(&1, &2));
        assert!(g.has_edge(&2, &1));
        let succ_of_2: Vec<_> = g.successors(&2).unwrap().collect();
        assert_eq!(succ_of_2, vec![(&1, &5)]);
    }

    #[test]
    fn undirected_self_loop_is_single_entry() {
        let mut g: Graph<u32, (), i32> = Graph::undirected();
        g.add_node(1, ());
        g.add_edge(1, 1, 7).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn remove_node_clears_incident_edges() {
        let mut g = small_directed();
        g.remove_node(&2);
        assert!(!g.has_node(&2));
        assert!(!g.has_edge(&1, &2));
        assert!(!g.has_edge(&2, &3));
        assert_eq!(g.successors(&1).unwrap().count(), 0);
    }

    #[test]
    fn remove_edge_undirected_removes_both_directions() {
        let mut g: Graph<u32, (), i32> = Graph::undirected();
        g.add_node(1, ());
        g.add_node(2, ());
        g.add_edge(1, 2, 3).unwrap();
        let removed = g.remove_edge(&1, &2);
        assert_eq!(removed, Some(3));
        assert!(!g.has_edge(&1, &2));
        assert!(!g.has_edge(&2, &1));
    }

    #[test]
    fn replacing_a_node_preserves_incident_edges() {
        let mut g = small_directed();
        g.add_node(1, "a-renamed");
        assert_eq!(g.node_data(&1), Some(&"a-renamed"));
        assert!(g.has_edge(&1, &2));
    }

    #[test]
    fn re_adding_an_edge_replaces_the_weight() {
        let mut g = small_directed();
        g.add_edge(1, 2, 999).unwrap();
        let w = g.successors(&1).unwrap().find(|(id, _)| **id == 2).unwrap().1;
        assert_eq!(*w, 999);
        assert_eq!(g.edge_count(), 2);
    }
}
