//! File manifest collection
//!
//! Recursively discovers input files under a root directory and produces a
//! deterministically ordered manifest. The baking tool's packing layout can
//! be sensitive to input order, so the manifest is sorted before it leaves
//! this module: identical input sets must produce identical atlases.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BakeError, BakeResult};

/// Collect all files under `root`, optionally filtered by extension
///
/// Hidden entries (names starting with `.`) are skipped, both files and
/// directories, so system markers like `.DS_Store` never reach the baker.
/// The extension filter is an exact match without the leading dot.
///
/// An empty result is valid; a missing root directory is an error.
pub fn collect_manifest(root: &Path, extension: Option<&str>) -> BakeResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BakeError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut manifest = Vec::new();
    collect_recursive(root, extension, &mut manifest)?;

    // Sort by string form so ordering never depends on filesystem iteration
    manifest.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    Ok(manifest)
}

fn collect_recursive(
    current: &Path,
    extension: Option<&str>,
    manifest: &mut Vec<PathBuf>,
) -> BakeResult<()> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        if is_hidden(&path) {
            continue;
        }

        if path.is_dir() {
            collect_recursive(&path, extension, manifest)?;
        } else if matches_extension(&path, extension) {
            manifest.push(path);
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

fn matches_extension(path: &Path, extension: Option<&str>) -> bool {
    match extension {
        Some(ext) => path.extension().map(|e| e == ext).unwrap_or(false),
        None => true,
    }
}
