//! macOS icon-set generation
//!
//! Renders a single source PNG into the standard macOS icon sizes with
//! `sips`, stages them in a temporary `.iconset` directory, then converts
//! the set to `.icns` with `iconutil`. The staging directory is removed on
//! every exit path, including failures part-way through the renders.
//!
//! Both external tools ship with macOS; planning the commands is platform
//! neutral and unit-testable, only `generate_icons` actually needs them.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{BakeError, BakeResult};

/// Point sizes of the standard macOS icon set
const ICON_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Rendered scales per size (1x and retina 2x)
const ICON_SCALES: [u32; 2] = [1, 2];

/// One external command in the icon pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl IconCommand {
    /// Render for display (dry runs, verbose logs)
    pub fn render(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }

    fn run(&self) -> BakeResult<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => BakeError::ToolMissing {
                    path: PathBuf::from(&self.program),
                },
                _ => BakeError::ToolLaunch {
                    program: self.program.clone(),
                    message: e.to_string(),
                },
            })?;

        if !status.success() {
            return Err(BakeError::ToolFailed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

/// Plan the full command sequence for one icon conversion
///
/// Ten `sips` resizes (five sizes at 1x and 2x) into `staging`, followed by
/// one `iconutil` conversion of the staged set.
pub fn plan_icon_commands(source_png: &Path, output_icns: &Path, staging: &Path) -> Vec<IconCommand> {
    let mut commands = Vec::new();

    for size in ICON_SIZES {
        for scale in ICON_SCALES {
            let pixels = size * scale;
            let staged = staging.join(format!("icon_{size}x{size}@{scale}x.png"));
            commands.push(IconCommand {
                program: "sips".to_string(),
                args: vec![
                    "-z".to_string(),
                    pixels.to_string(),
                    pixels.to_string(),
                    source_png.display().to_string(),
                    "--out".to_string(),
                    staged.display().to_string(),
                ],
            });
        }
    }

    commands.push(IconCommand {
        program: "iconutil".to_string(),
        args: vec![
            "--convert".to_string(),
            "icns".to_string(),
            "--output".to_string(),
            output_icns.display().to_string(),
            staging.display().to_string(),
        ],
    });

    commands
}

/// Generate an `.icns` file from a single source PNG
pub fn generate_icons(source_png: &Path, output_icns: &Path) -> BakeResult<()> {
    // iconutil requires the staging directory name to end in .iconset
    let staging = tempfile::Builder::new().suffix(".iconset").tempdir()?;

    for command in plan_icon_commands(source_png, output_icns, staging.path()) {
        command.run()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_shape() {
        let commands = plan_icon_commands(
            Path::new("res/icon.png"),
            Path::new("res/app.icns"),
            Path::new("/tmp/stage.iconset"),
        );

        // Five sizes, two scales, plus the final conversion
        assert_eq!(commands.len(), 11);
        assert!(commands[..10].iter().all(|c| c.program == "sips"));
        assert_eq!(commands[10].program, "iconutil");
    }

    #[test]
    fn test_retina_renders_double_pixels() {
        let commands = plan_icon_commands(
            Path::new("icon.png"),
            Path::new("app.icns"),
            Path::new("stage.iconset"),
        );

        let retina_512 = commands
            .iter()
            .find(|c| c.args.iter().any(|a| a.contains("icon_512x512@2x.png")))
            .unwrap();
        assert_eq!(retina_512.args[1], "1024");
        assert_eq!(retina_512.args[2], "1024");
    }

    #[test]
    fn test_conversion_points_at_staging() {
        let commands = plan_icon_commands(
            Path::new("icon.png"),
            Path::new("out/app.icns"),
            Path::new("stage.iconset"),
        );

        let convert = commands.last().unwrap();
        assert_eq!(
            convert.render(),
            "iconutil --convert icns --output out/app.icns stage.iconset"
        );
    }

    #[test]
    fn test_sips_command_render() {
        let commands = plan_icon_commands(
            Path::new("icon.png"),
            Path::new("app.icns"),
            Path::new("stage.iconset"),
        );

        assert_eq!(
            commands[0].render(),
            "sips -z 16 16 icon.png --out stage.iconset/icon_16x16@1x.png"
        );
    }
}
