use anyhow::Result;
use std::path::Path;

pub fn run(path: &Path, directed: bool) -> Result<()> {
    let graph = super::load_graph(path, directed)?;
    print!("{graph}");
    Ok(())
}
