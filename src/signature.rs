//! Cheap structural signatures used to prune candidate node pairs.
//!
//! Each signature is a necessary condition: two nodes whose signatures
//! differ cannot correspond under any isomorphism, but matching signatures
//! prove nothing. [`distinguish`] is the single gate the backtracking
//! engine consults before recursing into a tentative pairing.
//!
//! Signatures are recomputed on every comparison rather than cached per
//! graph; for the graph sizes this crate targets the recomputation cost is
//! dominated by the search itself.

use crate::graph::{Graph, NodeId};
use clap::ValueEnum;
use std::fmt;

/// Pruning strategy for candidate node pairs.
///
/// Every method starts from degree equality; the stronger two add a
/// neighborhood signature on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Degree equality only.
    Degree,
    /// Degree plus the sorted degrees of all neighbors.
    Neighbours,
    /// Degree plus the number of triangles through the node.
    #[default]
    Triangles,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Degree => "degree",
            Method::Neighbours => "neighbours",
            Method::Triangles => "triangles",
        };
        f.write_str(name)
    }
}

/// Number of neighbors of `node`.
pub fn degree(graph: &Graph, node: NodeId) -> usize {
    graph.neighbors(node).len()
}

/// Degrees of all neighbors of `node`, sorted ascending.
pub fn neighbour_degrees(graph: &Graph, node: NodeId) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph
        .neighbors(node)
        .iter()
        .map(|&w| degree(graph, w))
        .collect();
    degrees.sort_unstable();
    degrees
}

/// Number of ordered neighbor pairs of `node` that are themselves
/// adjacent. In an undirected graph each triangle through `node` is
/// counted twice.
pub fn triangle_count(graph: &Graph, node: NodeId) -> usize {
    let mut count = 0;
    for &v in graph.neighbors(node) {
        for &w in graph.neighbors(node) {
            if graph.is_edge(v, w) {
                count += 1;
            }
        }
    }
    count
}

/// Returns true when `method` cannot tell the two nodes apart, i.e. the
/// pair is still a viable candidate for the search. False prunes the pair.
pub fn distinguish(
    first: &Graph,
    first_node: NodeId,
    second: &Graph,
    second_node: NodeId,
    method: Method,
) -> bool {
    if degree(first, first_node) != degree(second, second_node) {
        return false;
    }
    match method {
        Method::Degree => true,
        Method::Neighbours => {
            neighbour_degrees(first, first_node) == neighbour_degrees(second, second_node)
        }
        Method::Triangles => {
            triangle_count(first, first_node) == triangle_count(second, second_node)
        }
    }
}
