//! Parsers for the two accepted text encodings of a graph.
//!
//! Format 1, edge list:
//!
//! ```text
//! 4         <- number of nodes
//! 0 1       <- an edge between 0 and 1
//! 2 3
//! ```
//!
//! Format 2, adjacency matrix:
//!
//! ```text
//! 3
//! 010
//! 101
//! 010
//! ```
//!
//! The line after the count decides the format: interior whitespace means
//! edge list, otherwise the line is read as the first matrix row. An empty
//! or absent second line yields a graph with no edges.
//!
//! Parsing is all-or-nothing: any malformed line, out-of-range endpoint or
//! self-loop (including a `1` on the matrix diagonal) fails the whole
//! parse and no graph is produced.

use crate::graph::{DirType, EdgeFormat, Graph, GraphError, NodeId};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line 1: expected a node count, found {found:?}")]
    InvalidCount { found: String },
    #[error("line {line}: expected `tail head`, found {found:?}")]
    MalformedEdge { line: usize, found: String },
    #[error("line {line}: matrix row has {found} columns, expected {expected}")]
    RaggedMatrixRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: matrix rows may contain only '0' and '1'")]
    InvalidMatrixChar { line: usize },
    #[error("line {line}: matrix row missing, expected {expected} rows")]
    MissingMatrixRow { line: usize, expected: usize },
    #[error("line {line}: {source}")]
    Graph { line: usize, source: GraphError },
}

/// Reads and parses a graph file in either encoding.
pub fn load_graph(path: &Path, dirtype: DirType) -> Result<Graph, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text, dirtype)
}

/// Parses a graph from text in either encoding.
pub fn parse_graph(input: &str, dirtype: DirType) -> Result<Graph, ParseError> {
    let mut lines = input.lines();
    let count_line = lines.next().unwrap_or("");
    let num_nodes: usize =
        count_line
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidCount {
                found: count_line.to_string(),
            })?;

    let mut graph = Graph::new(0, dirtype);
    graph.add_nodes(num_nodes);

    let Some(second) = lines.next() else {
        return Ok(graph);
    };
    if second.trim().is_empty() {
        return Ok(graph);
    }

    if second.chars().any(char::is_whitespace) {
        parse_edge_list(&mut graph, second, lines)?;
    } else {
        parse_matrix(&mut graph, num_nodes, second, lines)?;
    }
    Ok(graph)
}

fn parse_edge_list<'a>(
    graph: &mut Graph,
    first: &'a str,
    rest: impl Iterator<Item = &'a str>,
) -> Result<(), ParseError> {
    for (offset, line) in std::iter::once(first).chain(rest).enumerate() {
        let line_no = offset + 2;
        let malformed = || ParseError::MalformedEdge {
            line: line_no,
            found: line.to_string(),
        };
        let mut tokens = line.split_whitespace();
        let (Some(tail), Some(head)) = (tokens.next(), tokens.next()) else {
            return Err(malformed());
        };
        let tail: NodeId = tail.parse().map_err(|_| malformed())?;
        let head: NodeId = head.parse().map_err(|_| malformed())?;
        graph
            .add_edge(tail, head, EdgeFormat::List)
            .map_err(|source| ParseError::Graph {
                line: line_no,
                source,
            })?;
    }
    Ok(())
}

fn parse_matrix<'a>(
    graph: &mut Graph,
    num_nodes: usize,
    first: &'a str,
    mut rest: impl Iterator<Item = &'a str>,
) -> Result<(), ParseError> {
    let mut row = first;
    for tail in 0..num_nodes {
        let line_no = tail + 2;
        if row.len() != num_nodes {
            return Err(ParseError::RaggedMatrixRow {
                line: line_no,
                expected: num_nodes,
                found: row.len(),
            });
        }
        for (head, cell) in row.chars().enumerate() {
            match cell {
                '0' => {}
                '1' => {
                    graph
                        .add_edge(tail, head, EdgeFormat::Matrix)
                        .map_err(|source| ParseError::Graph {
                            line: line_no,
                            source,
                        })?;
                }
                _ => return Err(ParseError::InvalidMatrixChar { line: line_no }),
            }
        }
        if tail + 1 < num_nodes {
            row = rest.next().ok_or(ParseError::MissingMatrixRow {
                line: line_no + 1,
                expected: num_nodes,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(input: &str) -> Result<Graph, ParseError> {
        parse_graph(input, DirType::Undirected)
    }

    #[test]
    fn test_parse_edge_list() {
        let graph = undirected("3\n0 1\n1 2\n").unwrap();
        assert_eq!(graph.num_nodes(), 3);
        assert!(graph.is_edge(0, 1));
        assert!(graph.is_edge(1, 0));
        assert!(graph.is_edge(1, 2));
        assert!(!graph.is_edge(0, 2));
    }

    #[test]
    fn test_parse_matrix() {
        let graph = undirected("3\n010\n101\n010\n").unwrap();
        assert!(graph.is_edge(0, 1));
        assert!(graph.is_edge(1, 0));
        assert!(graph.is_edge(1, 2));
        assert!(!graph.is_edge(0, 2));
    }

    #[test]
    fn test_empty_second_line_means_no_edges() {
        let graph = undirected("4\n\n").unwrap();
        assert_eq!(graph.num_nodes(), 4);
        for v in 0..4 {
            assert!(graph.neighbors(v).is_empty());
        }
    }

    #[test]
    fn test_count_only_means_no_edges() {
        let graph = undirected("2").unwrap();
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn test_bad_count_line() {
        assert!(matches!(
            undirected("three\n0 1\n"),
            Err(ParseError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_malformed_edge_line() {
        assert!(matches!(
            undirected("3\n0 1\n2\n"),
            Err(ParseError::MalformedEdge { line: 3, .. })
        ));
    }

    #[test]
    fn test_extra_tokens_on_edge_line_are_ignored() {
        // Mirrors the stream-extraction behavior the format grew up with:
        // only the first two tokens of an edge line are read.
        let graph = undirected("2\n0 1 99\n").unwrap();
        assert!(graph.is_edge(0, 1));
    }

    #[test]
    fn test_edge_list_self_loop_is_fatal() {
        assert!(matches!(
            undirected("2\n1 1\n"),
            Err(ParseError::Graph {
                line: 2,
                source: GraphError::SelfLoop(1)
            })
        ));
    }

    #[test]
    fn test_matrix_diagonal_one_is_fatal() {
        assert!(matches!(
            undirected("2\n01\n11\n"),
            Err(ParseError::Graph {
                line: 3,
                source: GraphError::SelfLoop(1)
            })
        ));
    }

    #[test]
    fn test_out_of_range_endpoint_is_fatal() {
        assert!(matches!(
            undirected("2\n0 5\n"),
            Err(ParseError::Graph {
                line: 2,
                source: GraphError::InvalidEndpoint { id: 5, num_nodes: 2 }
            })
        ));
    }

    #[test]
    fn test_ragged_matrix_row() {
        assert!(matches!(
            undirected("3\n010\n10\n010\n"),
            Err(ParseError::RaggedMatrixRow {
                line: 3,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_missing_matrix_row() {
        assert!(matches!(
            undirected("3\n010\n101\n"),
            Err(ParseError::MissingMatrixRow { line: 4, expected: 3 })
        ));
    }

    #[test]
    fn test_invalid_matrix_char() {
        assert!(matches!(
            undirected("2\n0x\n10\n"),
            Err(ParseError::InvalidMatrixChar { line: 2 })
        ));
    }

    #[test]
    fn test_asymmetric_matrix_kept_asymmetric_under_undirected_tag() {
        let graph = undirected("2\n01\n00\n").unwrap();
        assert!(graph.is_edge(0, 1));
        assert!(!graph.is_edge(1, 0));
    }

    #[test]
    fn test_directed_edge_list_is_one_way() {
        let graph = parse_graph("2\n0 1\n", DirType::Directed).unwrap();
        assert!(graph.is_edge(0, 1));
        assert!(!graph.is_edge(1, 0));
    }
}
