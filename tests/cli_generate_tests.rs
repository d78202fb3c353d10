//! End-to-end tests for `harmonia generate`.

use harmonia::models::UiPalette;
use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn generate_json(home: &TempDir, extra: &[&str]) -> UiPalette {
    let mut args = vec!["generate", "--format", "json"];
    args.extend_from_slice(extra);
    let output = run_harmonia(home.path(), &args);
    assert_eq!(
        output.status.code(),
        Some(0),
        "generate should succeed. stderr: {}",
        stderr_of(&output)
    );
    serde_json::from_str(&stdout_of(&output)).expect("stdout should be palette JSON")
}

#[test]
fn test_generate_default_count() {
    let home = TempDir::new().unwrap();
    let palette = generate_json(&home, &["--seed", "1"]);
    assert!(palette.len() <= 12);
    assert!(palette.find_role("Background").is_some());
    assert!(palette.find_role("Text Primary").is_some());
}

#[test]
fn test_generate_seed_is_reproducible() {
    let home = TempDir::new().unwrap();
    let args = ["--seed", "42", "--count", "10", "--temperature", "warm"];
    let first = generate_json(&home, &args);
    let second = generate_json(&home, &args);
    assert_eq!(first, second);
}

#[test]
fn test_generate_keeps_locked_colors() {
    let home = TempDir::new().unwrap();
    let palette = generate_json(
        &home,
        &[
            "--seed",
            "3",
            "--lock",
            "Primary=#3b82f6",
            "--custom",
            "Mascot=#AA3366",
        ],
    );

    let primary = palette.find_role("Primary").unwrap();
    assert_eq!(primary.hex, "#3B82F6");
    assert!(primary.locked);
    assert_eq!(palette.custom.len(), 1);
    assert!(palette.custom[0].is_custom);
}

#[test]
fn test_generate_base_color_becomes_primary() {
    let home = TempDir::new().unwrap();
    let palette = generate_json(&home, &["--base", "#3B82F6", "--harmony", "triadic"]);
    assert_eq!(palette.brand[0].hex, "#3B82F6");
}

#[test]
fn test_generate_invalid_lock_fails_validation() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(home.path(), &["generate", "--lock", "Primary=#GGGGGG"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid hex should fail with exit code 1"
    );
    assert!(stderr_of(&output).contains("Invalid hex color"));
}

#[test]
fn test_generate_invalid_count_fails_validation() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(home.path(), &["generate", "--count", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_css_to_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("palette.css");
    let output = run_harmonia(
        home.path(),
        &[
            "generate",
            "--seed",
            "9",
            "--format",
            "css",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let css = fs::read_to_string(&out).unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-surface-background:"));
    assert!(stdout_of(&output).contains("palette.css"));
}

#[test]
fn test_generate_short_locked_hex_is_expanded() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(
        home.path(),
        &["generate", "--seed", "1", "--lock", "Primary=fa0", "--format", "css"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("--color-brand-primary: #FFAA00;"));
}

#[test]
fn test_generate_uses_config_defaults() {
    let home = TempDir::new().unwrap();
    let (config_path, _config_dir) =
        temp_config("[generator]\ntarget_count = 6\n\n[export]\nformat = \"hex\"\n");
    let output = run_harmonia(
        home.path(),
        &["--config", config_path.to_str().unwrap(), "generate", "--seed", "5"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    let entries: Vec<&str> = stdout.trim().split(", ").collect();
    assert!(!entries.is_empty() && entries.len() <= 6);
    assert!(entries.iter().all(|e| e.starts_with("0x") && e.len() == 8));
}

#[test]
fn test_generate_missing_config_file_is_io_error() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.toml");
    let output = run_harmonia(
        home.path(),
        &["--config", missing.to_str().unwrap(), "generate"],
    );
    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent config should exit with code 2"
    );
}

#[test]
fn test_generate_verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(
        home.path(),
        &["--verbose", "generate", "--seed", "2", "--format", "json"],
    );
    assert_eq!(output.status.code(), Some(0));
    let _: UiPalette = serde_json::from_str(&stdout_of(&output)).expect("stdout stays JSON");
    assert!(stderr_of(&output).contains("Generating palette"));
}
