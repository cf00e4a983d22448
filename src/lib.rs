//! A directed/undirected graph library: a core [`Graph`] container, BFS/DFS
//! traversal, topological sort, strongly connected components, Dijkstra's
//! shortest path, bipartite stable matching, and generators for classic
//! graph families.
//!
//! ```
//! use graphlib::Graph;
//!
//! let mut g: Graph<u32, (), u32> = Graph::directed();
//! g.add_node(1, ());
//! g.add_node(2, ());
//! g.add_edge(1, 2, 1).unwrap();
//! assert!(g.has_edge(&1, &2));
//! ```

#![deny(unsafe_code)]
#![warn(unreachable_pub)]

mod algo;
mod bipartite;
mod error;
mod graph;
pub mod generate;
mod traversal;

pub use algo::{shortest_path, strongly_connected_components, topological_sort};
pub use bipartite::{stable_marriage, StableMatching};
pub use error::GraphError;
pub use graph::{Graph, MissingEndpointPolicy, Orientation};
pub use traversal::{walk, walk_until, Strategy};
