use std::process::Command;

#[test]
fn test_icons_dry_run_plans_sips_and_iconutil() {
    let bin = env!("CARGO_BIN_EXE_assetbake");

    let output = Command::new(bin)
        .args([
            "icons",
            "--source-png", "icon.png",
            "--output", "app.icns",
            "--dry-run",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sips -z 16 16 icon.png"));
    assert!(stdout.contains("sips -z 1024 1024 icon.png"));
    assert!(stdout.contains("iconutil --convert icns --output app.icns"));

    let sips_lines = stdout.lines().filter(|l| l.trim().starts_with("sips")).count();
    assert_eq!(sips_lines, 10);
}
