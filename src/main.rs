//! Assetbake CLI - asset-build pipeline for native builds
//!
//! Usage: assetbake <COMMAND>
//!
//! Commands:
//!   bake      Collect input images and run the atlas baker
//!   sprites   Embed baked sprite descriptors as headers
//!   embed     Embed a single file as a header fragment
//!   pipeline  Bake, then embed the resulting descriptors
//!   icons     Generate a macOS .icns from a source PNG

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use assetbake::baker::BakerCommand;
use assetbake::config::BakeConfig;
use assetbake::embed::{embed_file, EmbedMode};
use assetbake::error::BakeError;

/// Extension of atlas input images
const IMAGE_EXTENSION: &str = "png";

/// Assetbake - asset-build pipeline for native builds
#[derive(Parser, Debug)]
#[command(name = "assetbake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect input images and run the atlas baker
    Bake {
        /// Directory scanned for input images
        #[arg(short, long, default_value = "res/images")]
        source: PathBuf,

        /// Path to the bake configuration file
        #[arg(short, long, default_value = "bake.toml")]
        config: PathBuf,

        /// Print the baker command without running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Embed baked sprite descriptors as headers
    Sprites {
        /// Directory holding the .sprite descriptor files
        #[arg(short, long, default_value = "res/sprites")]
        source: PathBuf,
    },

    /// Embed a single file as a header fragment
    Embed {
        /// Encoding mode: binary or text
        #[arg(short, long)]
        mode: String,

        /// File to embed
        file: PathBuf,
    },

    /// Bake, then embed the resulting sprite descriptors
    Pipeline {
        /// Directory scanned for input images
        #[arg(short, long, default_value = "res/images")]
        source: PathBuf,

        /// Path to the bake configuration file
        #[arg(short, long, default_value = "bake.toml")]
        config: PathBuf,

        /// Print the baker command without running it (skips embedding)
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a macOS .icns from a source PNG
    Icons {
        /// Input png file
        #[arg(long)]
        source_png: PathBuf,

        /// Output icns file
        #[arg(long)]
        output: PathBuf,

        /// Print the icon commands without running them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bake { source, config, dry_run } => {
            cmd_bake(&source, &config, dry_run, cli.json, cli.verbose)
        }
        Commands::Sprites { source } => cmd_sprites(&source, cli.json),
        Commands::Embed { mode, file } => cmd_embed(&mode, &file, cli.json),
        Commands::Pipeline { source, config, dry_run } => {
            cmd_bake(&source, &config, dry_run, cli.json, cli.verbose)?;
            if dry_run {
                return Ok(());
            }
            let loaded = BakeConfig::load_or_default(&config)?;
            cmd_sprites(&loaded.sprite_folder, cli.json)
        }
        Commands::Icons { source_png, output, dry_run } => {
            cmd_icons(&source_png, &output, dry_run, cli.json)
        }
    }
}

fn cmd_bake(source: &Path, config_path: &Path, dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    let config = BakeConfig::load_or_default(config_path)?;
    let manifest = assetbake::collect_manifest(source, Some(IMAGE_EXTENSION))?;

    if !json {
        println!("📦 Assetbake Bake");
        println!("Source: {}", source.display());
        println!("Atlas: {}x{} -> {}", config.atlas_width, config.atlas_height, config.output_path.display());
        println!("\n✓ Collected {} input images", manifest.len());
        if verbose > 0 {
            for path in &manifest {
                println!("  - {}", path.display());
            }
        }
    }

    let command = BakerCommand::build(&config, &manifest)?;

    if dry_run {
        if json {
            let output = serde_json::json!({
                "event": "bake",
                "dry_run": true,
                "inputs": manifest.len(),
                "listing_file": command.uses_listing(),
                "command": command.render(),
            });
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("\nWould run:");
            println!("  {}", command.render());
        }
        return Ok(());
    }

    match command.run() {
        Ok(_) => {}
        // The baker's exit status is this build step's exit status
        Err(BakeError::ToolFailed { program, status }) => {
            eprintln!("✗ '{}' failed with {}", program, status);
            std::process::exit(status.code().unwrap_or(1));
        }
        Err(err) => return Err(err.into()),
    }

    if json {
        let output = serde_json::json!({
            "event": "bake",
            "status": "success",
            "inputs": manifest.len(),
            "atlas": config.output_path.display().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Baked {} -> {}", manifest.len(), config.output_path.display());
    }

    Ok(())
}

fn cmd_sprites(source: &Path, json: bool) -> Result<()> {
    if !json {
        println!("🗂  Assetbake Sprites");
        println!("Source: {}", source.display());
    }

    let headers = assetbake::embed_sprite_directory(source)?;

    if json {
        let output = serde_json::json!({
            "event": "sprites",
            "status": "success",
            "embedded": headers.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n✓ Embedded {} sprite descriptors", headers.len());
        for path in &headers {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}

fn cmd_embed(mode: &str, file: &Path, json: bool) -> Result<()> {
    // Unknown modes are rejected before any file I/O happens
    let mode = match mode {
        "binary" => EmbedMode::Binary,
        "text" => EmbedMode::Text,
        other => anyhow::bail!("unknown embed mode '{}' - expected 'binary' or 'text'", other),
    };

    let header = embed_file(file, mode)?;

    if json {
        let output = serde_json::json!({
            "event": "embed",
            "status": "success",
            "source": file.display().to_string(),
            "header": header.display().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Embedded {} -> {}", file.display(), header.display());
    }

    Ok(())
}

fn cmd_icons(source_png: &Path, output: &Path, dry_run: bool, json: bool) -> Result<()> {
    use assetbake::icons::{generate_icons, plan_icon_commands};

    if dry_run {
        let commands = plan_icon_commands(source_png, output, Path::new("<staging>.iconset"));
        if json {
            let rendered: Vec<String> = commands.iter().map(|c| c.render()).collect();
            let out = serde_json::json!({
                "event": "icons",
                "dry_run": true,
                "commands": rendered,
            });
            println!("{}", serde_json::to_string(&out)?);
        } else {
            println!("🖼  Assetbake Icons");
            println!("Would run:");
            for command in &commands {
                println!("  {}", command.render());
            }
        }
        return Ok(());
    }

    generate_icons(source_png, output)?;

    if json {
        let out = serde_json::json!({
            "event": "icons",
            "status": "success",
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("✓ Generated {}", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_bake() {
        let cli = Cli::try_parse_from(["assetbake", "bake"]).unwrap();
        if let Commands::Bake { source, config, dry_run } = cli.command {
            assert_eq!(source, PathBuf::from("res/images"));
            assert_eq!(config, PathBuf::from("bake.toml"));
            assert!(!dry_run);
        } else {
            panic!("Expected Bake command");
        }
    }

    #[test]
    fn test_cli_parse_bake_with_args() {
        let cli = Cli::try_parse_from([
            "assetbake",
            "bake",
            "--source", "art/frames",
            "--config", "mobile.toml",
            "--dry-run",
        ])
        .unwrap();

        if let Commands::Bake { source, config, dry_run } = cli.command {
            assert_eq!(source, PathBuf::from("art/frames"));
            assert_eq!(config, PathBuf::from("mobile.toml"));
            assert!(dry_run);
        } else {
            panic!("Expected Bake command");
        }
    }

    #[test]
    fn test_cli_parse_embed() {
        let cli =
            Cli::try_parse_from(["assetbake", "embed", "--mode", "binary", "logo.png"]).unwrap();
        if let Commands::Embed { mode, file } = cli.command {
            assert_eq!(mode, "binary");
            assert_eq!(file, PathBuf::from("logo.png"));
        } else {
            panic!("Expected Embed command");
        }
    }

    #[test]
    fn test_cli_embed_requires_mode() {
        assert!(Cli::try_parse_from(["assetbake", "embed", "logo.png"]).is_err());
    }

    #[test]
    fn test_cli_parse_sprites() {
        let cli = Cli::try_parse_from(["assetbake", "sprites"]).unwrap();
        if let Commands::Sprites { source } = cli.command {
            assert_eq!(source, PathBuf::from("res/sprites"));
        } else {
            panic!("Expected Sprites command");
        }
    }

    #[test]
    fn test_cli_parse_pipeline() {
        let cli = Cli::try_parse_from(["assetbake", "pipeline", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Pipeline { dry_run: true, .. }));
    }

    #[test]
    fn test_cli_parse_icons() {
        let cli = Cli::try_parse_from([
            "assetbake",
            "icons",
            "--source-png", "icon.png",
            "--output", "app.icns",
        ])
        .unwrap();
        if let Commands::Icons { source_png, output, dry_run } = cli.command {
            assert_eq!(source_png, PathBuf::from("icon.png"));
            assert_eq!(output, PathBuf::from("app.icns"));
            assert!(!dry_run);
        } else {
            panic!("Expected Icons command");
        }
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["assetbake", "--json", "sprites"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["assetbake", "-vv", "bake"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
