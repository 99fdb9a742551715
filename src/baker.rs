//! Baker command construction and invocation
//!
//! Composes the external atlas baker's command line from a [`BakeConfig`]
//! and a file manifest, then runs it as a blocking child process. Input
//! paths are passed inline after `-input` when they fit comfortably under
//! the platform's argument-length ceiling; otherwise they are written to a
//! temporary listing file (one path per line) and the listing path is
//! passed instead. The baker accepts both forms and must see the identical
//! ordered path set either way.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::NamedTempFile;

use crate::config::BakeConfig;
use crate::error::{BakeError, BakeResult};

/// Marker token that precedes the input file list
pub const INPUT_FLAG: &str = "-input";

/// Conservative ceiling on the combined byte length of input path tokens.
///
/// Windows caps the whole command line at 32 KiB; Unix ARG_MAX is far
/// larger but shared with the environment. Both constants leave generous
/// headroom for the fixed flags, so staying under the ceiling can never
/// produce a command the platform rejects.
#[cfg(windows)]
const INPUT_BYTES_CEILING: usize = 24 * 1024;
#[cfg(not(windows))]
const INPUT_BYTES_CEILING: usize = 96 * 1024;

/// How the input file list is handed to the baker
#[derive(Debug)]
enum InputArgs {
    /// Each path as its own argument token
    Inline(Vec<String>),
    /// A single listing file, one path per line; the temp file guard keeps
    /// it alive until the child process has exited and deletes it on every
    /// exit path, including failure
    Listing(NamedTempFile),
}

/// A fully composed baker invocation
///
/// Holds the resolved binary, the ordered argument tokens, and ownership
/// of the listing file when one was materialized.
#[derive(Debug)]
pub struct BakerCommand {
    program: PathBuf,
    args: Vec<String>,
    listing: Option<NamedTempFile>,
}

impl BakerCommand {
    /// Compose the baker command for `manifest` under `config`
    ///
    /// Resolves the baker binary once, renders the fixed atlas flags, then
    /// materializes the input list in whichever mode fits the platform.
    pub fn build(config: &BakeConfig, manifest: &[PathBuf]) -> BakeResult<Self> {
        let program = config.resolve_baker_binary()?;

        let mut args = fixed_args(config);
        args.push(INPUT_FLAG.to_string());

        let listing = match materialize_inputs(manifest, INPUT_BYTES_CEILING)? {
            InputArgs::Inline(paths) => {
                args.extend(paths);
                None
            }
            InputArgs::Listing(file) => {
                args.push(file.path().display().to_string());
                Some(file)
            }
        };

        Ok(Self { program, args, listing })
    }

    /// The resolved baker binary
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The ordered argument tokens
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the input list went through a listing file
    pub fn uses_listing(&self) -> bool {
        self.listing.is_some()
    }

    /// Render the command for display (dry runs, verbose logs)
    pub fn render(&self) -> String {
        let mut out = self.program.display().to_string();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }

    /// Run the baker and wait for it to exit
    ///
    /// Blocking, no timeout, no retry: a failed bake fails the build step.
    /// The listing file, when present, outlives the child and is removed
    /// when this command is dropped.
    pub fn run(&self) -> BakeResult<ExitStatus> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => BakeError::ToolMissing {
                    path: self.program.clone(),
                },
                _ => BakeError::ToolLaunch {
                    program: self.program.display().to_string(),
                    message: e.to_string(),
                },
            })?;

        if !status.success() {
            return Err(BakeError::ToolFailed {
                program: self.program.display().to_string(),
                status,
            });
        }

        Ok(status)
    }
}

fn fixed_args(config: &BakeConfig) -> Vec<String> {
    let [r, g, b, a] = config.bgcolor;

    let mut args = vec![
        "-width".to_string(),
        config.atlas_width.to_string(),
        "-height".to_string(),
        config.atlas_height.to_string(),
        "-padding".to_string(),
        config.padding.to_string(),
        "-bgcolor".to_string(),
        r.to_string(),
        g.to_string(),
        b.to_string(),
        a.to_string(),
    ];

    if config.trim {
        args.push("-trim".to_string());
    }

    args.push("-format".to_string());
    args.push(config.format.clone());
    args.push("-sprite_folder".to_string());
    args.push(config.sprite_folder.display().to_string());
    args.push("-output".to_string());
    args.push(config.output_path.display().to_string());

    args
}

/// Decide between inline arguments and a listing file
///
/// The ceiling is compared against the combined length of the path tokens
/// plus a separator each; the fixed flags are covered by the ceiling's
/// headroom. An empty manifest is always inline (a bare `-input`).
fn materialize_inputs(manifest: &[PathBuf], ceiling: usize) -> BakeResult<InputArgs> {
    let paths: Vec<String> = manifest.iter().map(|p| p.display().to_string()).collect();
    let total: usize = paths.iter().map(|p| p.len() + 1).sum();

    if total <= ceiling {
        return Ok(InputArgs::Inline(paths));
    }

    let mut file = NamedTempFile::new()?;
    for path in &paths {
        writeln!(file, "{}", path)?;
    }
    // Flushed to durable storage before the baker reads it
    file.flush()?;
    file.as_file().sync_all()?;

    Ok(InputArgs::Listing(file))
}
