//! End-to-end tests for `harmonia harmony` and `harmonia scale`.

use serde::Deserialize;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HarmonyResponse {
    base: String,
    harmony_type: String,
    colors: Vec<String>,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct ScaleResponse {
    base: String,
    kind: String,
    colors: Vec<String>,
}

#[test]
fn test_harmony_triadic_red() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(
        home.path(),
        &["harmony", "--base", "f00", "--type", "triadic", "--json"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let response: HarmonyResponse = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(response.base, "#FF0000");
    assert_eq!(response.harmony_type, "triadic");
    assert_eq!(response.colors, vec!["#00FF00", "#0000FF"]);
    assert!((response.score - 0.92).abs() < 1e-9);
}

#[test]
fn test_harmony_type_from_config() {
    let home = TempDir::new().unwrap();
    let (config_path, _dir) = temp_config("[generator]\nharmony = \"tetradic\"\n");
    let output = run_harmonia(
        home.path(),
        &[
            "--config",
            config_path.to_str().unwrap(),
            "harmony",
            "--base",
            "#FF0000",
            "--json",
        ],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let response: HarmonyResponse = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(response.harmony_type, "tetradic");
    assert_eq!(response.colors.len(), 3);
}

#[test]
fn test_harmony_accessible_requires_professional() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(home.path(), &["harmony", "--base", "#FF0000", "--accessible"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_harmony_professional_text_output() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(
        home.path(),
        &[
            "harmony",
            "--base",
            "#3B82F6",
            "--type",
            "split-complementary",
            "--professional",
            "--accessible",
        ],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("splitComplementary harmony of #3B82F6"));
    assert!(stdout.contains("Harmony score:"));
}

#[test]
fn test_harmony_invalid_base() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(home.path(), &["harmony", "--base", "blue"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_scale_shades() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(
        home.path(),
        &["scale", "--base", "#FF0000", "--kind", "shades", "--count", "5", "--json"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let response: ScaleResponse = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(response.base, "#FF0000");
    assert_eq!(response.kind, "shades");
    assert_eq!(response.colors.first().map(String::as_str), Some("#000000"));
    assert_eq!(response.colors.last().map(String::as_str), Some("#FFFFFF"));
    assert_eq!(response.colors.len(), 5);
}

#[test]
fn test_scale_tints_plain_output() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(
        home.path(),
        &["scale", "--base", "#FF0000", "--kind", "tints", "-n", "3"],
    );
    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<String> = stdout_of(&output).lines().map(String::from).collect();
    assert_eq!(lines, vec!["#FF0000", "#FF8080", "#FFFFFF"]);
}

#[test]
fn test_scale_rejects_zero_count() {
    let home = TempDir::new().unwrap();
    let output = run_harmonia(home.path(), &["scale", "--base", "#FF0000", "--count", "0"]);
    assert_eq!(output.status.code(), Some(1));
}
