//! Assetbake - asset-build pipeline for native builds
//!
//! Assetbake turns loose source files into build-consumable artifacts
//! before compilation: it assembles a manifest of input images and drives
//! the external atlas baker over it, then embeds the baked sprite
//! descriptors (or any other file) as compilable C++ header fragments so
//! the data ships inside the binary.

pub mod baker;
pub mod config;
pub mod embed;
pub mod error;
pub mod icons;
pub mod manifest;
pub mod sprites;

// Re-exports for convenience
pub use baker::BakerCommand;
pub use config::BakeConfig;
pub use embed::{embed_file, EmbedMode};
pub use error::{BakeError, BakeResult};
pub use manifest::collect_manifest;
pub use sprites::embed_sprite_directory;
