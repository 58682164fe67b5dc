use std::fs;
use std::path::PathBuf;

use mulligan_scenario::{ConfigError, ScenarioConfig, evaluate};

const BURN_YAML: &str = r#"
name: "searing_spear_opener"
hand_size: 7
deck:
  - name: "mountain"
    copies: 25
  - name: "searing_spear"
    copies: 4
  - name: "other"
    copies: 31
requirements:
  - group: "mountain"
    at_least: 2
  - group: "searing_spear"
    at_least: 1
"#;

fn write_scenario(dir: &tempfile::TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("scenario file should be writable");
    path
}

#[test]
fn loads_and_evaluates_scenario_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(&dir, "burn.yaml", BURN_YAML);

    let config = ScenarioConfig::from_path(&path).expect("scenario should load");
    let report = evaluate(&config).expect("scenario should evaluate");

    assert_eq!(report.name, "searing_spear_opener");
    assert_eq!(report.favorable_hands, "128022600");
    assert_eq!(report.total_hands, "386206920");
    assert!(report.probability > 0.0 && report.probability < 1.0);
}

#[test]
fn missing_file_surfaces_read_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = ScenarioConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn malformed_yaml_surfaces_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(&dir, "broken.yaml", "name: [unclosed");

    let err = ScenarioConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn invalid_scenario_surfaces_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        &dir,
        "greedy.yaml",
        r#"
name: "greedy"
hand_size: 99
deck:
  - name: "land"
    copies: 10
"#,
    );

    let err = ScenarioConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("hand_size"));
}
