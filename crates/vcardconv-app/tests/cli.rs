//! End-to-end runs of the `vcardconv` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assert_cmd::cargo;

const EXPORT: &str = "BEGIN:VCARD\r\n\
    VERSION:3.0\r\n\
    N:Doe;Jane;;;\r\n\
    FN:Jane Doe\r\n\
    ORG:Acme;\r\n\
    TEL;type=CELL;type=VOICE;type=pref:(555) 123-4567\r\n\
    item1.ADR;type=HOME:;;1 Main St;Springfield;IL;62704;\r\n\
    item1.X-ABADR:us\r\n\
    X-CUSTOM-FIELD:foo\r\n\
    END:VCARD\r\n";

fn vcardconv() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("vcardconv"));
    cmd.env_remove("VCARDCONV__LOGGING__LEVEL");
    cmd
}

fn write_export(dir: &Path) -> PathBuf {
    let path = dir.join("contacts.vcf");
    fs::write(&path, EXPORT).unwrap();
    path
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    vcardconv().current_dir(dir).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn writes_csv_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());

    let output = run_in(dir.path(), &["contacts.vcf", "-c", "--phone"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let csv = fs::read_to_string(dir.path().join("contacts.vcf.csv")).unwrap();
    assert_eq!(
        csv,
        "\"Name: Last\",\"Name: First\",\"Name: Full\",\"Organization: Name\",\"Phone: Cell\",\"Address: Home\"\r\n\
         \"Doe\",\"Jane\",\"Jane Doe\",\"Acme\",\"555-123-4567\",\";;1 Main St;Springfield;IL;62704;\"\r\n"
    );
}

#[test]
fn writes_json_to_named_output() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());

    let output = run_in(
        dir.path(),
        &["contacts.vcf", "people.json", "-j", "--address", "--preferred"],
    );

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let json = fs::read_to_string(dir.path().join("people.json")).unwrap();
    assert!(json.contains("\"Home\": \"1 Main St\\nSpringfield, IL 62704\""));
    assert!(json.contains("\"Cell (Preferred)\": \"(555) 123-4567\""));
    assert!(!json.contains("X-CUSTOM-FIELD"));
}

#[test]
fn display_with_reorder() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());

    let output = run_in(dir.path(), &["contacts.vcf", "-d", "--reorder"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("New vCard Entry:\n  Organization: Name: Acme\n  Name: Last: Doe\n"));
    assert!(!dir.path().join("contacts.vcf.csv").exists());
}

#[test]
fn unknown_report_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());

    let output = run_in(dir.path(), &["contacts.vcf", "-u", "-c"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "vCard Entry 1: Jane Doe\n  X-CUSTOM-FIELD: foo\n"
    );
    assert!(!dir.path().join("contacts.vcf.csv").exists());
}

#[test]
fn refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());
    fs::write(dir.path().join("contacts.vcf.csv"), "keep").unwrap();

    let output = run_in(dir.path(), &["contacts.vcf", "-c"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--overwrite"));
    assert_eq!(
        fs::read_to_string(dir.path().join("contacts.vcf.csv")).unwrap(),
        "keep"
    );

    let output = run_in(dir.path(), &["contacts.vcf", "-c", "--overwrite"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_ne!(
        fs::read_to_string(dir.path().join("contacts.vcf.csv")).unwrap(),
        "keep"
    );
}

#[test]
fn stamped_output_name() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());

    let output = run_in(dir.path(), &["contacts.vcf", "out", "-j", "--stamp2", "--zulu"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("out-"))
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].ends_with("Z.json"), "got {}", names[0]);
}

#[test]
fn rejects_non_vcf_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("contacts.txt"), EXPORT).unwrap();

    let output = run_in(dir.path(), &["contacts.txt", "-d"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("must have a .vcf extension"));
}

#[test]
fn rejects_missing_mode() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path());

    let output = run_in(dir.path(), &["contacts.vcf"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn malformed_input_fails_with_line() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.vcf"), "BEGIN:VCARD\r\nFN:x\r\n").unwrap();

    let output = run_in(dir.path(), &["broken.vcf", "-d"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 1: unterminated record"));
}
