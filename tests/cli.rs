#![cfg(feature = "lopdf")]

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pdfdocs(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pdfdocs").unwrap();
    cmd.current_dir(workdir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn empty_directory_prints_one_line_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let output = pdfdocs(&dir).arg(dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("No PDF files found"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn two_page_document_is_extracted_with_page_markers() {
    let dir = TempDir::new().unwrap();
    common::write_pdf(&dir.path().join("sample.pdf"), &["Hello", "World"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading: sample.pdf"))
        .stdout(predicate::str::contains(format!("{}\nReading", "=".repeat(60))))
        .stdout(predicate::str::contains("Text extracted to:"));

    let content = fs::read_to_string(dir.path().join("sample_extracted.txt")).unwrap();
    assert!(content.starts_with("\n--- Page 1 ---\n"));
    let page_two = content.find("\n--- Page 2 ---\n").unwrap();
    assert!(content[..page_two].contains("Hello"));
    assert!(content[page_two..].contains("World"));
}

#[test]
fn corrupt_document_yields_error_text_and_run_continues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.pdf"), "definitely not a pdf").unwrap();
    common::write_pdf(&dir.path().join("good.pdf"), &["Fine"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading PDF: "));

    let bad = fs::read_to_string(dir.path().join("bad_extracted.txt")).unwrap();
    assert!(bad.starts_with("Error reading PDF: "));

    let good = fs::read_to_string(dir.path().join("good_extracted.txt")).unwrap();
    assert!(good.contains("Fine"));
}

#[test]
fn rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    common::write_pdf(&dir.path().join("a.pdf"), &["Alpha"]);
    common::write_pdf(&dir.path().join("b.pdf"), &["Beta", "Gamma"]);

    pdfdocs(&dir).arg(dir.path()).assert().success();
    let first_a = fs::read_to_string(dir.path().join("a_extracted.txt")).unwrap();
    let first_b = fs::read_to_string(dir.path().join("b_extracted.txt")).unwrap();

    pdfdocs(&dir).arg(dir.path()).assert().success();
    assert_eq!(fs::read_to_string(dir.path().join("a_extracted.txt")).unwrap(), first_a);
    assert_eq!(fs::read_to_string(dir.path().join("b_extracted.txt")).unwrap(), first_b);

    assert_eq!(
        common::extracted_outputs(dir.path()),
        vec!["a_extracted.txt", "b_extracted.txt"]
    );
}

#[test]
fn differently_cased_extension_is_not_read() {
    let dir = TempDir::new().unwrap();
    common::write_pdf(&dir.path().join("a.pdf"), &["Lower"]);
    common::write_pdf(&dir.path().join("a.PDF"), &["Upper"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading: a.pdf"))
        .stdout(predicate::str::contains("Reading: a.PDF").not());

    assert_eq!(common::extracted_outputs(dir.path()), vec!["a_extracted.txt"]);
    let content = fs::read_to_string(dir.path().join("a_extracted.txt")).unwrap();
    assert!(content.contains("Lower"));
    assert!(!content.contains("Upper"));
}

#[cfg(unix)]
#[test]
fn links_are_followed_and_dangling_links_get_error_text() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    common::write_pdf(&elsewhere.path().join("real.pdf"), &["Linked"]);
    std::os::unix::fs::symlink(elsewhere.path().join("real.pdf"), dir.path().join("link.pdf")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("missing.pdf"), dir.path().join("broken.pdf")).unwrap();

    pdfdocs(&dir)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading: broken.pdf"));

    assert_eq!(
        common::extracted_outputs(dir.path()),
        vec!["broken_extracted.txt", "link_extracted.txt"]
    );
    let linked = fs::read_to_string(dir.path().join("link_extracted.txt")).unwrap();
    assert!(linked.contains("Linked"));
    let broken = fs::read_to_string(dir.path().join("broken_extracted.txt")).unwrap();
    assert!(broken.starts_with("Error reading PDF: "));
}

#[test]
fn working_directory_config_and_environment_are_ignored() {
    let workdir = TempDir::new().unwrap();
    let docs = TempDir::new().unwrap();
    fs::write(workdir.path().join("pdfdocs.toml"), "[output]\nsuffix = \"_stray\"\n").unwrap();
    common::write_pdf(&docs.path().join("sample.pdf"), &["Hello"]);

    pdfdocs(&workdir)
        .arg(docs.path())
        .env("PDFDOCS_BACKEND", "mupdf")
        .assert()
        .success();

    assert_eq!(common::extracted_outputs(docs.path()), vec!["sample_extracted.txt"]);
}

#[test]
fn config_next_to_documents_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pdfdocs.toml"), "[output]\nsuffix = \"_extracted\"\necho_text = false\n")
        .unwrap();
    common::write_pdf(&dir.path().join("quiet.pdf"), &["Hidden"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Hidden").not());

    assert!(fs::read_to_string(dir.path().join("quiet_extracted.txt"))
        .unwrap()
        .contains("Hidden"));
}

#[test]
fn unavailable_backend_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    common::write_pdf(&dir.path().join("sample.pdf"), &["Hello"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .args(["--backend", "mupdf"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not available"))
        .stderr(predicate::str::contains("cargo install"));

    assert!(common::extracted_outputs(dir.path()).is_empty());
}

#[test]
fn missing_directory_is_rejected() {
    let dir = TempDir::new().unwrap();

    pdfdocs(&dir)
        .arg(dir.path().join("nowhere"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid directory"));
}

#[test]
fn no_echo_still_writes_file() {
    let dir = TempDir::new().unwrap();
    common::write_pdf(&dir.path().join("quiet.pdf"), &["Secret"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .arg("--no-echo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Secret").not());

    let content = fs::read_to_string(dir.path().join("quiet_extracted.txt")).unwrap();
    assert!(content.contains("Secret"));
}

#[test]
fn json_mode_emits_document_and_summary_objects() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.pdf"), "nope").unwrap();

    let output = pdfdocs(&dir)
        .arg(dir.path())
        .args(["--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let objects: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(objects[0]["type"], "document");
    assert_eq!(objects[0]["filename"], "broken.pdf");
    assert!(objects[0]["error"].is_string());

    let summary = objects.last().unwrap();
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["report"]["documents"].as_array().unwrap().len(), 1);
}

#[test]
fn dry_run_lists_without_writing() {
    let dir = TempDir::new().unwrap();
    common::write_pdf(&dir.path().join("plan.pdf"), &["Later"]);

    pdfdocs(&dir)
        .arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan.pdf"))
        .stdout(predicate::str::contains("plan_extracted.txt"));

    assert!(common::extracted_outputs(dir.path()).is_empty());
}

#[test]
fn generate_config_writes_sample() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("pdfdocs.toml");

    pdfdocs(&dir)
        .arg("--generate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[output]"));
    assert!(content.contains("suffix = \"_extracted\""));
}
