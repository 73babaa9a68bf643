use assert_cmd::prelude::*;
use predicates::prelude::*;
use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn flattens_file_to_tsv_lines() -> Result<(), Box<dyn std::error::Error>> {
    let input = "{\n  \"a\": 1,\n  \"b\": { \"c\": true, \"d\": null }\n}\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, ["a\t1", "b.c\ttrue", "b.d\tnull"]);
    Ok(())
}

#[test]
fn json_format_emits_row_objects() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .arg("--format")
        .arg("json")
        .write_stdin("{\"a\": [1, 2]}")
        .output()?;
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        rows,
        serde_json::json!([
            { "key": "a.0", "value": 1 },
            { "key": "a.1", "value": 2 }
        ])
    );
    Ok(())
}

#[test]
fn bracket_arrays_flag_changes_paths() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .arg("--bracket-arrays")
        .write_stdin("{\"a\": [true]}")
        .assert()
        .success()
        .stdout(predicate::str::contains("a[0]\ttrue"));
    Ok(())
}

#[test]
fn expand_rebuilds_nested_json() -> Result<(), Box<dyn std::error::Error>> {
    let rows = r#"[{"key": "a.b", "value": 1}, {"key": "a.c", "value": "x"}]"#;
    let output = Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .arg("--expand")
        .write_stdin(rows)
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v, serde_json::json!({ "a": { "b": 1, "c": "x" } }));
    Ok(())
}

#[test]
fn strict_expand_rejects_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let rows = r#"[{"key": "a", "value": 1}, {"key": "a.b", "value": 2}]"#;
    Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .arg("--expand")
        .arg("--strict")
        .write_stdin(rows)
        .assert()
        .failure()
        .stderr(predicate::str::contains("path conflict"));
    Ok(())
}

#[test]
fn invalid_json_fails_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("flatrow-cli"))
        .write_stdin("{ nope")
        .assert()
        .failure();
    Ok(())
}
