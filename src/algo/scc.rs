//! Iterative Tarjan strongly-connected-components.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;

/// Per-node bookkeeping Tarjan's algorithm needs during the DFS.
struct NodeData {
    index: usize,
    lowlink: usize,
}

/// One frame of the explicit DFS stack: the node being visited and how far
/// through its successor list we've gotten (so the "recursive call returns"
/// can resume where it left off instead of native recursion).
struct Frame<Id> {
    node: Id,
    successors: Vec<Id>,
    next_successor: usize,
}

/// Strongly connected components of `g`, in reverse topological order of the
/// condensation (sinks first). Each node appears in exactly one component;
/// the union of all components equals `g.all_nodes()`.
///
/// Implemented iteratively (an explicit work-stack standing in for
/// recursion) so the depth of the graph's DFS tree doesn't bound the depth
/// of the native call stack.
pub fn strongly_connected_components<Id, N, W>(g: &Graph<Id, N, W>) -> Vec<Vec<Id>>
where
    Id: Clone + Eq + Hash + Debug,
{
    let mut index_counter = 0usize;
    let mut data: HashMap<Id, NodeData> = HashMap::new();
    let mut stack: Vec<Id> = Vec::new();
    let mut on_stack: HashSet<Id> = HashSet::new();
    let mut components: Vec<Vec<Id>> = Vec::new();

    for start in g.all_nodes() {
        if data.contains_key(start) {
            continue;
        }
        visit(
            start.clone(),
            g,
            &mut index_counter,
            &mut data,
            &mut stack,
            &mut on_stack,
            &mut components,
        );
    }

    components
}

#[allow(clippy::too_many_arguments)]
fn visit<Id, N, W>(
    root: Id,
    g: &Graph<Id, N, W>,
    index_counter: &mut usize,
    data: &mut HashMap<Id, NodeData>,
    stack: &mut Vec<Id>,
    on_stack: &mut HashSet<Id>,
    components: &mut Vec<Vec<Id>>,
) where
    Id: Clone + Eq + Hash + Debug,
{
    let mut frames: Vec<Frame<Id>> = vec![new_frame(root, g)];
    enter(&frames[0].node, index_counter, data, stack, on_stack);

    while let Some(frame) = frames.last_mut() {
        if frame.next_successor < frame.successors.len() {
            let successor = frame.successors[frame.next_successor].clone();
            frame.next_successor += 1;

            if !data.contains_key(&successor) {
                enter(&successor, index_counter, data, stack, on_stack);
                frames.push(new_frame(successor, g));
            } else if on_stack.contains(&successor) {
                let successor_index = data[&successor].index;
                let node = frames.last().unwrap().node.clone();
                let entry = data.get_mut(&node).unwrap();
                entry.lowlink = entry.lowlink.min(successor_index);
            }
        } else {
            let frame = frames.pop().unwrap();
            let node = frame.node;
            let (node_index, node_lowlink) = {
                let entry = &data[&node];
                (entry.index, entry.lowlink)
            };

            if node_lowlink == node_index {
                let mut component = Vec::new();
                loop {
                    let member = stack.pop().expect("component root must be on the stack");
                    on_stack.remove(&member);
                    let done = member == node;
                    component.push(member);
                    if done {
                        break;
                    }
                }
                components.push(component);
            }

            if let Some(parent) = frames.last_mut() {
                let parent_entry = data.get_mut(&parent.node).unwrap();
                parent_entry.lowlink = parent_entry.lowlink.min(node_lowlink);
            }
        }
    }
}

fn new_frame<Id, N, W>(node: Id, g: &Graph<Id, N, W>) -> Frame<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    let successors = g
        .successors(&node)
        .expect("node came from all_nodes(), so it exists")
        .map(|(id, _)| id.clone())
        .collect();
    Frame {
        node,
        successors,
        next_successor: 0,
    }
}

fn enter<Id>(
    node: &Id,
    index_counter: &mut usize,
    data: &mut HashMap<Id, NodeData>,
    stack: &mut Vec<Id>,
    on_stack: &mut HashSet<Id>,
) where
    Id: Clone + Eq + Hash,
{
    let index = *index_counter;
    *index_counter += 1;
    data.insert(
        node.clone(),
        NodeData {
            index,
            lowlink: index,
        },
    );
    stack.push(node.clone());
    on_stack.insert(node.clone());
}
