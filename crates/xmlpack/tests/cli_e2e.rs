//! End-to-end tests for the `xmlpack` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

const SAMPLE_MD: &str = "# Test\nThis is a test document with **bold** text.";

/// Command isolated from any real user config.
fn xmlpack_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xmlpack"));
    cmd.env("XMLPACK_CONFIG", dir.join("missing-config.json"))
        .env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    tempdir().expect("tempdir")
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_markdown_file_prints_record() {
    let dir = workspace();
    let input = dir.path().join("doc.md");
    fs::write(&input, SAMPLE_MD).unwrap();

    let output = xmlpack_cmd(dir.path())
        .arg("analyze")
        .arg(&input)
        .args(["--type", "markdown"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["input_type"], "markdown");
    assert_eq!(record["word_count"], 10);
    assert_eq!(record["markdown_features"]["formatting"]["bold"], 2);
}

#[test]
fn analyze_reads_stdin_and_stores_options() {
    let dir = workspace();
    let output = xmlpack_cmd(dir.path())
        .args(["analyze", "--type", "json", "--option", "retries=3", "--option", "source=pipe"])
        .write_stdin(r#"{"a": [1, 2]}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["json_structure"]["valid"], true);
    assert_eq!(record["json_structure"]["keys"][0], "a");
    assert_eq!(record["processing_options"]["retries"], 3);
    assert_eq!(record["processing_options"]["source"], "pipe");
}

#[test]
fn analyze_missing_file_fails_with_hint() {
    let dir = workspace();
    xmlpack_cmd(dir.path())
        .args(["analyze", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.md"))
        .stderr(predicate::str::contains("Hints:"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn analyze_then_render_round_trip() {
    let dir = workspace();
    let record = dir.path().join("record.json");
    xmlpack_cmd(dir.path())
        .args(["analyze", "--type", "markdown", "--out"])
        .arg(&record)
        .write_stdin("# Plan\n## Steps\n- one\n- two\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    xmlpack_cmd(dir.path())
        .arg("render")
        .arg(&record)
        .args(["--id", "plan-7", "--template", "analysis_report"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<AnalysisReport id=\"plan-7\" generated=\"",
        ))
        .stdout(predicate::str::contains("<SectionCount>2</SectionCount>"))
        .stdout(predicate::str::contains("<ListCount>2</ListCount>"));
}

#[test]
fn render_partial_record_uses_defaults() {
    let dir = workspace();
    let record = dir.path().join("partial.json");
    fs::write(&record, r#"{"complexity_score": 12}"#).unwrap();

    xmlpack_cmd(dir.path())
        .arg("render")
        .arg(&record)
        .args(["--id", "p", "--template", "task_packet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<EstimatedEffort>High (1-2 weeks)</EstimatedEffort>",
        ));
}

#[test]
fn render_rejects_non_json_record() {
    let dir = workspace();
    let record = dir.path().join("bad.json");
    fs::write(&record, "not json").unwrap();

    xmlpack_cmd(dir.path())
        .arg("render")
        .arg(&record)
        .args(["--id", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid analysis record"))
        .stderr(predicate::str::contains("xmlpack process"));
}

// ---------------------------------------------------------------------------
// process
// ---------------------------------------------------------------------------

#[test]
fn process_renders_task_packet() {
    let dir = workspace();
    xmlpack_cmd(dir.path())
        .args(["process", "--type", "markdown", "--id", "job", "--template", "task_packet"])
        .write_stdin(SAMPLE_MD)
        .assert()
        .success()
        .stdout(predicate::str::contains("<Title>Process: # Test</Title>"))
        .stdout(predicate::str::ends_with("</TaskPacket>\n"));
}

#[test]
fn process_unknown_template_falls_back_to_default() {
    let dir = workspace();
    xmlpack_cmd(dir.path())
        .args(["process", "--id", "x", "--template", "bogus"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("template=\"default\""));
}

#[test]
fn process_json_emits_receipt() {
    let dir = workspace();
    let output = xmlpack_cmd(dir.path())
        .args(["process", "--type", "xml", "--id", "feed", "--json"])
        .write_stdin("<feed><item/></feed>")
        .output()
        .unwrap();
    assert!(output.status.success());

    let receipt: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(receipt["output_id"], "feed");
    assert_eq!(receipt["analysis"]["xml_structure"]["elements"], 2);
    assert!(receipt["xml_output"].as_str().unwrap().starts_with("<Output id=\"feed\""));
}

// ---------------------------------------------------------------------------
// templates, profiles and flags
// ---------------------------------------------------------------------------

#[test]
fn templates_lists_catalog() {
    let dir = workspace();
    xmlpack_cmd(dir.path())
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("task_packet"))
        .stdout(predicate::str::contains(
            "Structured task breakdown with effort estimates",
        ));
}

#[test]
fn templates_json_is_parseable() {
    let dir = workspace();
    let output = xmlpack_cmd(dir.path())
        .args(["templates", "--json"])
        .output()
        .unwrap();
    let catalog: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(catalog[2]["schema_file"], "analysis-schema.xml");
}

#[test]
fn profile_supplies_type_and_template() {
    let dir = workspace();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"profiles": {"notes": {"input_type": "markdown", "template": "analysis_report", "options": {"team": "docs"}}}}"#,
    )
    .unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xmlpack"));
    cmd.env("XMLPACK_CONFIG", &config)
        .env_remove("RUST_LOG")
        .args(["process", "--profile", "notes", "--id", "n"])
        .write_stdin("# Heading\ntext")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<AnalysisReport"))
        .stdout(predicate::str::contains("<MarkdownFeatures>"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = workspace();
    let config = dir.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xmlpack"));
    cmd.env("XMLPACK_CONFIG", &config)
        .arg("templates")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let dir = workspace();
    xmlpack_cmd(dir.path())
        .args(["-v", "process", "--id", "v"])
        .write_stdin("words")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<Output"))
        .stderr(predicate::str::contains("process"));
}

#[test]
fn render_requires_id() {
    let dir = workspace();
    xmlpack_cmd(dir.path())
        .args(["render", "record.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}
