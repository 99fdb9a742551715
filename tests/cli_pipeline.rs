use std::fs;
use std::process::Command;

use tempfile::tempdir;

/// Full flow against a fake baker: the script stands in for the external
/// tool and drops one descriptor into the sprite folder, which the
/// pipeline then embeds.
#[cfg(unix)]
#[test]
fn test_pipeline_bakes_then_embeds_descriptors() {
    use std::os::unix::fs::PermissionsExt;

    let bin = env!("CARGO_BIN_EXE_assetbake");
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("res/images")).unwrap();
    fs::create_dir_all(dir.path().join("res/sprites")).unwrap();
    fs::create_dir_all(dir.path().join("tools")).unwrap();
    fs::write(dir.path().join("res/images/hero.png"), b"").unwrap();

    let tool = dir.path().join("tools/baketool");
    fs::write(
        &tool,
        "#!/bin/sh\nprintf '{\"frames\":1}' > res/sprites/hero.sprite\n",
    )
    .unwrap();
    let mut perms = fs::metadata(&tool).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&tool, perms).unwrap();

    let output = Command::new(bin)
        .arg("pipeline")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "pipeline failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let header = fs::read_to_string(dir.path().join("res/sprites/hero.h")).unwrap();
    assert!(header.contains("constexpr const char* hero_data = R\"({\"frames\":1})\";"));
}

#[test]
fn test_pipeline_dry_run_skips_embedding() {
    let bin = env!("CARGO_BIN_EXE_assetbake");
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("res/images")).unwrap();
    fs::create_dir_all(dir.path().join("tools")).unwrap();
    fs::write(dir.path().join("tools/baketool"), b"").unwrap();

    let output = Command::new(bin)
        .args(["pipeline", "--dry-run"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "dry run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would run:"));
}
