use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn render_merged_emits_adds_for_every_want_entry() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fps-reconcile"));
    cmd.arg("render")
        .arg(fixture("fixtures/want_basic.toml"))
        .arg("--state")
        .arg("merged")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<fp><name>fp1</name><logical-port>1/1</logical-port><fd-name>fd1</fd-name></fp>",
        ))
        .stdout(predicate::str::contains("<fp><name>fp2</name><fd-name>fd2</fd-name></fp>"));
}

#[test]
fn render_merged_omits_empty_optional_fields() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fps-reconcile"));
    cmd.arg("render")
        .arg(fixture("fixtures/want_basic.toml"))
        .arg("--state")
        .arg("merged")
        .assert()
        .success()
        .stdout(predicate::str::contains("<fp><name>fp2</name><logical-port>").not());
}

#[test]
fn render_deleted_with_empty_want_removes_everything_reported() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fps-reconcile"));
    cmd.arg("render")
        .arg(fixture("fixtures/want_empty.toml"))
        .arg("--state")
        .arg("deleted")
        .arg("--facts")
        .arg(fixture("fixtures/facts_two_ports.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<fp operation="remove"><name>fp1</name></fp>"#,
        ))
        .stdout(predicate::str::contains(
            r#"<fp operation="remove"><name>fp9</name></fp>"#,
        ));
}

#[test]
fn render_overridden_removes_reported_entries_then_adds_want() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fps-reconcile"));
    let assert = cmd
        .arg("render")
        .arg(fixture("fixtures/want_basic.toml"))
        .arg("--state")
        .arg("overridden")
        .arg("--facts")
        .arg(fixture("fixtures/facts_two_ports.xml"))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let remove_fp9 = stdout
        .find(r#"<fp operation="remove"><name>fp9</name></fp>"#)
        .expect("fp9 removed");
    let add_fp2 = stdout
        .find("<fp><name>fp2</name>")
        .expect("fp2 added");
    assert!(remove_fp9 < add_fp2, "removes precede adds");
}

#[test]
fn render_envelope_wraps_payload_and_writes_output_file() {
    let dir = tempdir().expect("tempdir");
    let out_path = dir.path().join("payload.xml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fps-reconcile"));
    cmd.arg("render")
        .arg(fixture("fixtures/want_basic.toml"))
        .arg("--state")
        .arg("merged")
        .arg("--envelope")
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).expect("payload file");
    assert!(written.starts_with("<config><fps>"));
    assert!(written.ends_with("</fps></config>"));
}

#[test]
fn render_rejects_unknown_state() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fps-reconcile"));
    cmd.arg("render")
        .arg(fixture("fixtures/want_basic.toml"))
        .arg("--state")
        .arg("upserted")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
