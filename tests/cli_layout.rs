use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn depmap_ctl() -> Command {
    Command::cargo_bin("depmap-ctl").unwrap()
}

#[test]
fn test_layout_json_reports_the_inferred_facts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::create_dir(root.join("spec")).unwrap();
    fs::write(
        root.join("package.json"),
        r#"{"installConfig": {"pnp": true}}"#,
    )
    .unwrap();

    let output = depmap_ctl()
        .arg("layout")
        .arg("--json")
        .arg(root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let facts: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(facts["likelyMonorepo"], false);
    assert_eq!(facts["sourceFolderCandidates"], serde_json::json!(["src"]));
    assert_eq!(facts["testFolderCandidates"], serde_json::json!(["spec"]));
    assert_eq!(facts["testsWithinSource"], false);
    assert_eq!(facts["yarnPnpEnabled"], true);
    assert_eq!(facts["hasTypescriptConfig"], false);
}

#[test]
fn test_layout_text_output_mentions_the_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("packages")).unwrap();

    depmap_ctl()
        .arg("layout")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout facts for:"))
        .stdout(predicate::str::contains("monorepo:"));
}

#[test]
fn test_layout_of_a_missing_directory_degrades_to_empty_findings() {
    // An unreadable root is an empty set of signals, not an error
    depmap_ctl()
        .arg("layout")
        .arg("--json")
        .arg("this-folder-does-not-exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"likelyMonorepo\": false"));
}

#[test]
fn test_help_lists_both_commands() {
    depmap_ctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("layout"));
}
