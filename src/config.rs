//! Bake configuration
//!
//! All atlas parameters and tool locations live in one explicit structure
//! resolved once per invocation, loaded from a TOML file next to the
//! assets (`bake.toml` by convention). Missing file means built-in
//! defaults; a present-but-invalid file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BakeError, BakeResult};

/// Atlas and tool configuration for one bake target
///
/// Each build target keeps one canonical configuration (e.g. a smaller,
/// denser atlas for mobile, a larger one for desktop).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakeConfig {
    /// Target atlas width in pixels
    #[serde(default = "default_atlas_side")]
    pub atlas_width: u32,

    /// Target atlas height in pixels
    #[serde(default = "default_atlas_side")]
    pub atlas_height: u32,

    /// Padding between packed sprites, in pixels
    #[serde(default = "default_padding")]
    pub padding: u32,

    /// Background fill color, RGBA channels
    #[serde(default)]
    pub bgcolor: [u8; 4],

    /// Trim transparent whitespace around sprites
    #[serde(default = "default_trim")]
    pub trim: bool,

    /// Output image format passed to the baker
    #[serde(default = "default_format")]
    pub format: String,

    /// Directory that receives the baked sprite descriptor files
    #[serde(default = "default_sprite_folder")]
    pub sprite_folder: PathBuf,

    /// Output path of the baked atlas image
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Directory searched for the baker binary when `binary_path` is unset
    #[serde(default = "default_tools_dir")]
    pub tools_dir: PathBuf,

    /// Explicit baker binary, overriding platform resolution
    #[serde(default)]
    pub binary_path: Option<PathBuf>,
}

fn default_atlas_side() -> u32 {
    512
}

fn default_padding() -> u32 {
    2
}

fn default_trim() -> bool {
    true
}

fn default_format() -> String {
    "png".to_string()
}

fn default_sprite_folder() -> PathBuf {
    PathBuf::from("res/sprites")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("res/sprite_atlas.png")
}

fn default_tools_dir() -> PathBuf {
    PathBuf::from("tools")
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            atlas_width: default_atlas_side(),
            atlas_height: default_atlas_side(),
            padding: default_padding(),
            bgcolor: [0, 0, 0, 0],
            trim: default_trim(),
            format: default_format(),
            sprite_folder: default_sprite_folder(),
            output_path: default_output_path(),
            tools_dir: default_tools_dir(),
            binary_path: None,
        }
    }
}

impl BakeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BakeResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BakeError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to defaults when the file is absent
    ///
    /// A file that exists but fails to parse is still an error; silently
    /// baking with defaults over a typo would be worse than failing.
    pub fn load_or_default(path: &Path) -> BakeResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the baker binary for the current platform
    ///
    /// One capability lookup before any command is built: an explicit
    /// `binary_path` wins, otherwise the platform's binary name under
    /// `tools_dir`. The resolved path must exist.
    pub fn resolve_baker_binary(&self) -> BakeResult<PathBuf> {
        let path = match &self.binary_path {
            Some(explicit) => explicit.clone(),
            None => self.tools_dir.join(platform_baker_name()),
        };

        if !path.exists() {
            return Err(BakeError::ToolMissing { path });
        }

        Ok(path)
    }
}

#[cfg(windows)]
fn platform_baker_name() -> &'static str {
    "baketool.exe"
}

#[cfg(not(windows))]
fn platform_baker_name() -> &'static str {
    "baketool"
}
