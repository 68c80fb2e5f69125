use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Worked example: coverage 0.3, integration 0, sophistication 1.0,
// documentation 0 -> final score 32.
const DEGRADED_SNAPSHOT: &str = r#"{
    "categories": {
        "ops": { "count": 5, "name": "Operations" },
        "sales": { "count": 5, "name": "Sales" }
    },
    "integrated_pairs": 0,
    "tiers": { "enterprise": 10 },
    "sop_count": 0,
    "avg_sop_steps": 0.0,
    "total_categories": 5,
    "total_tools": 10
}"#;

// Full coverage, integrated, documented, sensible tiers: no rules fire.
const HEALTHY_SNAPSHOT: &str = r#"{
    "categories": {
        "ops": { "count": 2 },
        "sales": { "count": 2 }
    },
    "integrated_pairs": 4,
    "tiers": { "low-cost": 4 },
    "sop_count": 5,
    "avg_sop_steps": 6.0,
    "total_categories": 2,
    "total_tools": 4
}"#;

fn write_snapshot(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(&path, content).expect("snapshot should write");
    path
}

fn autoscore() -> Command {
    Command::cargo_bin("autoscore").expect("binary should compile")
}

#[test]
fn score_renders_markdown_report_with_worked_example_score() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), DEGRADED_SNAPSHOT);

    autoscore()
        .arg("score")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score: 32/100"))
        .stdout(predicate::str::contains("Developing automation maturity"))
        .stdout(predicate::str::contains("## Components"))
        .stdout(predicate::str::contains("sophistication: 100%"))
        .stdout(predicate::str::contains("## Recommendations"));
}

#[test]
fn score_json_format_serializes_breakdown() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), DEGRADED_SNAPSHOT);

    autoscore()
        .arg("score")
        .arg(&snapshot)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 32"))
        .stdout(predicate::str::contains("\"generated_at\""))
        .stdout(predicate::str::contains("\"priority\": \"high\""));
}

#[test]
fn score_fail_under_gates_exit_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), DEGRADED_SNAPSHOT);

    autoscore()
        .arg("score")
        .arg(&snapshot)
        .args(["--fail-under", "50"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("below threshold"));

    autoscore()
        .arg("score")
        .arg(&snapshot)
        .args(["--fail-under", "30"])
        .assert()
        .success();
}

#[test]
fn score_picks_up_config_next_to_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), DEGRADED_SNAPSHOT);
    // Shift all weight onto sophistication (1.0 here): score becomes 100.
    fs::write(
        dir.path().join("autoscore.toml"),
        r#"
[weights]
coverage = 0.0
integration = 0.0
sophistication = 1.0
documentation = 0.0
"#,
    )
    .expect("config should write");

    autoscore()
        .arg("score")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score: 100/100"));
}

#[test]
fn score_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), DEGRADED_SNAPSHOT);
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[weights]\ncoverage = 0.9\n").expect("config should write");

    autoscore()
        .arg("score")
        .arg(&snapshot)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn recommend_lists_fired_rules_with_category_names() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), DEGRADED_SNAPSHOT);

    autoscore()
        .arg("recommend")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expand automation coverage"))
        .stdout(predicate::str::contains("[high priority, high impact, medium effort]"))
        .stdout(predicate::str::contains("Improve tool integration"))
        .stdout(predicate::str::contains("Document core processes"))
        .stdout(predicate::str::contains("Review enterprise tool spend"))
        .stdout(predicate::str::contains("Break down data silos"));
}

#[test]
fn recommend_reports_empty_backlog() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), HEALTHY_SNAPSHOT);

    autoscore()
        .arg("recommend")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("no recommendations"));
}

#[test]
fn score_rejects_malformed_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, "{ broken").expect("file should write");

    autoscore()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot parse error"));
}
