use std::io::Write;

use assert_cmd::Command;

fn php_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".php").tempfile().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn phpuse() -> Command {
    Command::cargo_bin("phpuse").unwrap()
}

#[test]
fn usage_without_args() {
    let out = phpuse().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: phpuse"), "{stderr}");
}

#[test]
fn uses_requires_file() {
    let out = phpuse().arg("uses").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing <file>"));
}

#[test]
fn unknown_command() {
    let out = phpuse().args(["frobnicate", "x.php"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown command: frobnicate"));
}

#[test]
fn uses_prints_sorted_map() {
    let file = php_file(b"<?php\nuse Foo\\Bar;\nuse Foo\\Baz as Qux;\nuse Acme\\{Widget};\n");
    let out = phpuse()
        .arg("uses")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Bar => \\Foo\\Bar\nQux => \\Foo\\Baz\nWidget => \\Acme\\Widget\n"
    );
}

#[test]
fn uses_json_output() {
    let file = php_file(b"<?php use A\\B as C;");
    let out = phpuse()
        .args(["uses", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["uses"]["C"], "\\A\\B");
    assert_eq!(v["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn unreadable_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.php");
    let out = phpuse().arg("uses").arg(&missing).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn non_utf8_file_still_lists_imports() {
    let file = php_file(b"<?php\n// caf\xe9\nuse Foo\\Bar;\n");
    let out = phpuse().arg("uses").arg(file.path()).output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Bar => \\Foo\\Bar\n");
}

#[test]
fn directory_reports_fixed_message() {
    let dir = tempfile::tempdir().unwrap();
    let out = phpuse().arg("uses").arg(dir.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed read file"), "{stderr}");
}

#[test]
fn check_reports_warnings_without_failing() {
    let file = php_file(b"<?php\nuse A\\B, C\\D");
    let out = phpuse().arg("check").arg(file.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("warning[W0001]"), "{stderr}");
    assert!(stderr.contains("  | use A\\B, C\\D"), "{stderr}");
}

#[test]
fn check_fails_on_lexer_errors() {
    let file = php_file(b"<?php use A; 'open");
    let out = phpuse().arg("check").arg(file.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unterminated string literal"));
}

#[test]
fn tokens_lists_kinds() {
    let file = php_file(b"<?php use A;");
    let out = phpuse().arg("tokens").arg(file.path()).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first = stdout.lines().next().unwrap_or("");
    assert_eq!(first, "OpenTag\t0..6\t<?php ");
    assert!(stdout.contains("KwUse\t6..9\tuse"), "{stdout}");
}

#[test]
fn short_tags_flag() {
    let file = php_file(b"<? use A\\B;");
    let off = phpuse().arg("uses").arg(file.path()).output().unwrap();
    assert!(off.stdout.is_empty());
    let on = phpuse()
        .args(["uses", "short-tags"])
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&on.stdout), "B => \\A\\B\n");
}

#[test]
fn tokens_json_emits_diagnostics_as_json() {
    let file = php_file(b"<?php use A; 'open");
    let out = phpuse()
        .args(["tokens", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let last = stdout.lines().last().unwrap_or("");
    let v: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(v["severity"], "error");
    assert_eq!(v["code"], "E0002");
}

#[test]
fn check_json_carries_labels() {
    let file = php_file(b"<?php use A\\{B\\{C}};");
    let out = phpuse()
        .args(["check", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let nested = stdout
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|v| v["code"] == "W0002")
        .unwrap();
    assert_eq!(nested["labels"][0]["message"], "outer group opened here");
    assert_eq!(nested["labels"][0]["span"]["start"], 12);
}
