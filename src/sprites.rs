//! Sprite descriptor embedding
//!
//! After a bake, the sprite folder holds one descriptor file per sprite
//! recording where it landed in the atlas. Each descriptor is embedded as
//! a text-mode header so the game reads it from the binary, not from disk.

use std::path::{Path, PathBuf};

use crate::embed::{embed_file, EmbedMode};
use crate::error::BakeResult;
use crate::manifest::collect_manifest;

/// Extension of baked sprite descriptor files
pub const SPRITE_EXTENSION: &str = "sprite";

/// Embed every sprite descriptor under `dir` as a text header
///
/// Conversions are independent of each other; discovery order is sorted so
/// logs and rebuilds stay stable. The first failure aborts the walk.
/// Returns the written header paths in discovery order.
pub fn embed_sprite_directory(dir: &Path) -> BakeResult<Vec<PathBuf>> {
    let descriptors = collect_manifest(dir, Some(SPRITE_EXTENSION))?;

    let mut headers = Vec::with_capacity(descriptors.len());
    for descriptor in &descriptors {
        headers.push(embed_file(descriptor, EmbedMode::Text)?);
    }

    Ok(headers)
}
