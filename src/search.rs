//! Backtracking search for a node bijection preserving adjacency in both
//! directions.
//!
//! The search grows a partial mapping along the frontier of the mapped
//! region: it takes the first mapped node (in id order) that still has an
//! unmapped neighbor, and tries to pair that neighbor with each unmapped
//! neighbor of the mapped node's image, in stored order. Candidate pairs
//! are gated through [`distinguish`] before recursing. A failing branch
//! undoes exactly its own assignment, so the mapping is consistent at
//! every stable point and no locking or copying is needed.
//!
//! When the frontier is empty but nodes remain (disconnected remainder),
//! the search guesses a pairing for the single lowest-id unmapped node and
//! tries all unmapped images for it. Only that one branch point is opened,
//! so for disconnected inputs some component pairing orders are never
//! explored; an isomorphism can be missed. This matches the behavior the
//! crate inherits and is deliberately left as is.
//!
//! Worst case is super-polynomial in the node count; no polynomial
//! algorithm for the general problem is known.

use crate::graph::{Graph, NodeId};
use crate::signature::{Method, distinguish, triangle_count};
use log::debug;

/// A partial bijection between the node sets of two graphs, kept in both
/// directions: `phi[v] == Some(w)` exactly when `phi_inv[w] == Some(v)` at
/// every stable point of the search.
#[derive(Debug, Clone)]
struct Mapping {
    phi: Vec<Option<NodeId>>,
    phi_inv: Vec<Option<NodeId>>,
}

impl Mapping {
    fn new(num_nodes: usize) -> Self {
        Mapping {
            phi: vec![None; num_nodes],
            phi_inv: vec![None; num_nodes],
        }
    }

    fn image(&self, v: NodeId) -> Option<NodeId> {
        self.phi[v]
    }

    fn preimage(&self, w: NodeId) -> Option<NodeId> {
        self.phi_inv[w]
    }

    fn assign(&mut self, v: NodeId, w: NodeId) {
        self.phi[v] = Some(w);
        self.phi_inv[w] = Some(v);
    }

    fn unassign(&mut self, v: NodeId, w: NodeId) {
        self.phi[v] = None;
        self.phi_inv[w] = None;
    }

    fn is_total(&self) -> bool {
        self.phi.iter().all(Option::is_some)
    }

    fn into_vec(self) -> Vec<NodeId> {
        debug_assert!(self.is_total());
        self.phi.into_iter().flatten().collect()
    }
}

/// Checks that the mapping carries every edge of `first` to an edge of
/// `second` and every edge of `second` back to an edge of `first`. A
/// mapping leaving any endpoint unmapped fails.
fn preserves_adjacency(first: &Graph, second: &Graph, mapping: &Mapping) -> bool {
    for v in 0..first.num_nodes() {
        for &w in first.neighbors(v) {
            match (mapping.image(v), mapping.image(w)) {
                (Some(a), Some(b)) if second.is_edge(a, b) => {}
                _ => return false,
            }
        }
    }
    for v in 0..second.num_nodes() {
        for &w in second.neighbors(v) {
            match (mapping.preimage(v), mapping.preimage(w)) {
                (Some(a), Some(b)) if first.is_edge(a, b) => {}
                _ => return false,
            }
        }
    }
    true
}

/// Finds the growth point of the partial mapping: the first mapped node of
/// `graph` in id order that still has an unmapped neighbor. Returns that
/// neighbor together with the mapped node's image, or `None` when the
/// mapped region is saturated (disconnected remainder).
fn frontier_pair(graph: &Graph, mapping: &Mapping) -> Option<(NodeId, NodeId)> {
    for v in 0..graph.num_nodes() {
        let Some(image) = mapping.image(v) else {
            continue;
        };
        for &w in graph.neighbors(v) {
            if mapping.image(w).is_none() {
                return Some((w, image));
            }
        }
    }
    None
}

/// One step of the backtracking search: tentatively pair `v` with `w` and
/// grow the mapping from there. Success leaves the assignment in place all
/// the way up; failure undoes exactly this call's assignment before
/// returning.
fn try_match(
    first: &Graph,
    second: &Graph,
    mapping: &mut Mapping,
    method: Method,
    v: NodeId,
    w: NodeId,
) -> bool {
    mapping.assign(v, w);

    if mapping.is_total() {
        if preserves_adjacency(first, second, mapping) {
            return true;
        }
    } else if let Some((next, anchor_image)) = frontier_pair(first, mapping) {
        // Admissible images for the frontier node are the still-unmapped
        // neighbors of its mapped neighbor's image, in stored order.
        for &candidate in second.neighbors(anchor_image) {
            if mapping.preimage(candidate).is_some() {
                continue;
            }
            if distinguish(first, next, second, candidate, method)
                && try_match(first, second, mapping, method, next, candidate)
            {
                return true;
            }
        }
    } else if let Some(next) = (0..first.num_nodes()).find(|&u| mapping.image(u).is_none()) {
        // Disconnected remainder: no mapped node has an unmapped neighbor,
        // so the frontier gives no hint. Guess a pairing for the lowest
        // unmapped node against every unmapped image. Only this one branch
        // point is opened here.
        for candidate in 0..second.num_nodes() {
            if mapping.preimage(candidate).is_some() {
                continue;
            }
            if distinguish(first, next, second, candidate, method)
                && try_match(first, second, mapping, method, next, candidate)
            {
                return true;
            }
        }
    }

    mapping.unassign(v, w);
    false
}

/// Searches for a node bijection between `first` and `second` under which
/// an edge exists in one graph exactly when its image exists in the other,
/// pruning candidate pairs with `method`.
///
/// Returns the witness as a vector sending node `v` of `first` to
/// `witness[v]` in `second`, or `None` when no isomorphism was found.
/// Absence of an isomorphism is the normal negative result, not an error.
///
/// For disconnected inputs the search may miss isomorphisms that require a
/// component pairing order it never tries; see the module docs.
///
/// # Example
///
/// ```
/// use isomatch::graph::{DirType, EdgeFormat, Graph};
/// use isomatch::search::isomorphic;
/// use isomatch::signature::Method;
///
/// let mut triangle = Graph::new(3, DirType::Undirected);
/// for (tail, head) in [(0, 1), (1, 2), (2, 0)] {
///     triangle.add_edge(tail, head, EdgeFormat::List).unwrap();
/// }
/// let witness = isomorphic(&triangle, &triangle, Method::Triangles);
/// assert_eq!(witness, Some(vec![0, 1, 2]));
/// ```
pub fn isomorphic(first: &Graph, second: &Graph, method: Method) -> Option<Vec<NodeId>> {
    if first.num_nodes() != second.num_nodes() {
        return None;
    }
    if first.num_nodes() == 0 {
        // Two empty graphs are isomorphic via the empty mapping.
        return Some(Vec::new());
    }

    // Seed the search by pairing node 0 of `first` with every node of
    // `second` sharing its triangle signature, in id order.
    let seed_signature = triangle_count(first, 0);
    for candidate in 0..second.num_nodes() {
        if triangle_count(second, candidate) != seed_signature {
            continue;
        }
        debug!("seed attempt: 0 -> {candidate}");
        let mut mapping = Mapping::new(first.num_nodes());
        if try_match(first, second, &mut mapping, method, 0, candidate) {
            debug!("isomorphism found from seed 0 -> {candidate}");
            return Some(mapping.into_vec());
        }
    }
    None
}

/// Independently checks a claimed witness: `phi` must be a bijection on
/// the node ids carrying adjacency forward and back.
pub fn verify_isomorphism(first: &Graph, second: &Graph, phi: &[NodeId]) -> bool {
    let num_nodes = first.num_nodes();
    if second.num_nodes() != num_nodes || phi.len() != num_nodes {
        return false;
    }
    let mut mapping = Mapping::new(num_nodes);
    for (v, &w) in phi.iter().enumerate() {
        if w >= num_nodes || mapping.preimage(w).is_some() {
            return false;
        }
        mapping.assign(v, w);
    }
    preserves_adjacency(first, second, &mapping)
}
