pub mod check;
pub mod show;

use anyhow::{Context, Result};
use isomatch::graph::{DirType, Graph};
use std::path::Path;

/// Parses a graph file, attaching the path to any failure.
pub fn load_graph(path: &Path, directed: bool) -> Result<Graph> {
    let dirtype = if directed {
        DirType::Directed
    } else {
        DirType::Undirected
    };
    isomatch::parser::load_graph(path, dirtype)
        .with_context(|| format!("failed to read graph from {}", path.display()))
}
