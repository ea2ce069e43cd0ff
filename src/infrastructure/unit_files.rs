use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of exported unit files.
pub const UNIT_EXTENSION: &str = "json";

/// Expand the command-line inputs into unit files.
///
/// Files are taken as given; directories are searched recursively for
/// `.json` units. Directory results are sorted so runs are reproducible.
pub fn collect_unit_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            collect_recursive(input, &mut found)?;
            found.sort();
            files.extend(found);
        } else if input.exists() {
            files.push(input.clone());
        } else {
            anyhow::bail!("input {} does not exist", input.display());
        }
    }
    Ok(files)
}

fn collect_recursive(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_recursive(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == UNIT_EXTENSION) {
            out.push(path);
        }
    }
    Ok(())
}
