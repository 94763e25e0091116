//! Adjacency-list model of finite simple graphs.
//!
//! Graphs are built once (node count plus edge insertions, or via
//! [`crate::parser`]) and are read-only afterwards; a search never mutates
//! them, so they can be shared freely across independent searches.
//!
//! Self-loops are rejected at construction. Parallel edges from list input
//! are stored as given; no dedup happens. Node ids are 0-based and
//! contiguous in `[0, num_nodes)`.

use std::fmt;
use thiserror::Error;

/// A node identifier. Ids are 0-based and contiguous within a graph.
pub type NodeId = usize;

/// Errors raised while assembling a graph. Any of them rejects the whole
/// graph; no partially-built graph escapes construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge endpoint {id} out of range for a graph with {num_nodes} nodes")]
    InvalidEndpoint { id: NodeId, num_nodes: usize },
    #[error("self-loop at node {0}: loops are not allowed")]
    SelfLoop(NodeId),
}

/// Whether edges are one-way or symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirType {
    Directed,
    Undirected,
}

/// The encoding an edge insertion came from.
///
/// List edges on an undirected graph are mirrored at insertion time. Matrix
/// edges are stored exactly as the matrix dictates, one directed entry per
/// `1` cell, so an asymmetric matrix keeps its asymmetry even when the
/// graph is tagged [`DirType::Undirected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFormat {
    List,
    Matrix,
}

/// A single node: its neighbor ids in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Node {
    neighbors: Vec<NodeId>,
}

impl Node {
    fn add_neighbor(&mut self, id: NodeId) {
        self.neighbors.push(id);
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// A simple graph stored as adjacency lists.
#[derive(Debug, Clone)]
pub struct Graph {
    dirtype: DirType,
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new(num_nodes: usize, dirtype: DirType) -> Self {
        Graph {
            dirtype,
            nodes: vec![Node::default(); num_nodes],
        }
    }

    pub fn dirtype(&self) -> DirType {
        self.dirtype
    }

    /// Extends node storage by `count` fresh isolated nodes.
    pub fn add_nodes(&mut self, count: usize) {
        self.nodes
            .resize_with(self.nodes.len() + count, Node::default);
    }

    /// Inserts the edge `tail -> head`.
    ///
    /// On an undirected graph, [`EdgeFormat::List`] insertion mirrors the
    /// edge; [`EdgeFormat::Matrix`] insertion stores exactly the one
    /// directed entry. Endpoints must be in range and distinct.
    pub fn add_edge(
        &mut self,
        tail: NodeId,
        head: NodeId,
        format: EdgeFormat,
    ) -> Result<(), GraphError> {
        let num_nodes = self.num_nodes();
        for id in [tail, head] {
            if id >= num_nodes {
                return Err(GraphError::InvalidEndpoint { id, num_nodes });
            }
        }
        if tail == head {
            return Err(GraphError::SelfLoop(tail));
        }
        self.nodes[tail].add_neighbor(head);
        if self.dirtype == DirType::Undirected && format == EdgeFormat::List {
            self.nodes[head].add_neighbor(tail);
        }
        Ok(())
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Neighbor list of `v` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range. The search driver never produces
    /// such a query; hitting this is a caller bug, not an input error.
    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        assert!(
            v < self.num_nodes(),
            "node id {v} out of range for a graph with {} nodes",
            self.num_nodes()
        );
        self.nodes[v].neighbors()
    }

    /// Whether the edge `v -> w` (or `v - w`) is present, by linear scan
    /// of `v`'s neighbor list.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn is_edge(&self, v: NodeId, w: NodeId) -> bool {
        assert!(
            w < self.num_nodes(),
            "node id {w} out of range for a graph with {} nodes",
            self.num_nodes()
        );
        self.neighbors(v).contains(&w)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, relation) = match self.dirtype {
            DirType::Directed => ("Digraph", "leaving"),
            DirType::Undirected => ("Undirected graph", "incident to"),
        };
        writeln!(
            f,
            "{kind} with {} vertices, numbered 0,...,{}.",
            self.num_nodes(),
            self.num_nodes().saturating_sub(1)
        )?;
        for (v, node) in self.nodes.iter().enumerate() {
            writeln!(f, "The following edges are {relation} vertex {v}:")?;
            for &w in node.neighbors() {
                writeln!(f, "{v} - {w}")?;
            }
        }
        Ok(())
    }
}
