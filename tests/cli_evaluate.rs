// tests/cli_evaluate.rs - End-to-end runs of the oquare binary
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const WORKED: &str = r#"{
  "name": "worked",
  "classes": [
    { "iri": "A" },
    { "iri": "B", "subclass_of": ["A"] },
    { "iri": "C", "subclass_of": ["A"] },
    { "iri": "D", "subclass_of": ["B"] }
  ]
}"#;

fn workspace() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("worked.json"), WORKED).unwrap();
    d
}

fn oquare(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oquare"))
        .current_dir(dir)
        .env_remove("OQUARE_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout_json(out: &Output) -> Value {
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn test_evaluate_json() {
    let d = workspace();
    let out = oquare(d.path(), &["evaluate", "worked.json", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let report = stdout_json(&out);
    assert_eq!(report["ontology"], "worked");
    assert_eq!(report["indicators"]["LCOMOnto"], 2.5);
    assert_eq!(report["indicators"]["DITOnto"], 2);
    assert_eq!(report["bands"]["LCOMOnto"], "L4");
    assert_eq!(report["bands"]["ANOnto"], "L1");
    assert_eq!(report["basic_metrics"]["numberOfClasses"], 4);
}

#[test]
fn test_evaluate_include_root() {
    let d = workspace();
    let out = oquare(d.path(), &["evaluate", "worked.json", "--json", "--include-root"]);
    assert_eq!(out.status.code(), Some(0));
    let report = stdout_json(&out);
    assert_eq!(report["root_policy"], "include");
    assert_eq!(report["basic_metrics"]["numberOfClasses"], 5);
}

#[test]
fn test_evaluate_xml_to_file() {
    let d = workspace();
    let out = oquare(d.path(), &["evaluate", "worked.json", "--xml", "--out", "report.xml"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("<ontologyMetrics>"));
    let written = fs::read_to_string(d.path().join("report.xml")).unwrap();
    assert!(written.contains("<ontologyName>worked</ontologyName>"));
    assert!(written.contains("<DITOnto>2</DITOnto>"));
    assert!(written.contains("<LCOMOnto>2.500000000000000</LCOMOnto>"));
}

#[test]
fn test_text_report() {
    let d = workspace();
    let out = oquare(d.path(), &["evaluate", "worked.json"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("LCOMOnto"));
    assert!(stdout.contains("ANOnto"));
}

#[test]
fn test_invalid_model_exits_2() {
    let d = workspace();
    fs::write(d.path().join("broken.json"), "{ not json").unwrap();
    assert_eq!(oquare(d.path(), &["evaluate", "broken.json"]).status.code(), Some(2));
    assert_eq!(oquare(d.path(), &["evaluate", "missing.json"]).status.code(), Some(2));
}

#[test]
fn test_fail_below_flag_exits_3() {
    let d = workspace();
    let out = oquare(d.path(), &["evaluate", "worked.json", "--json", "--fail-below", "L2"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ANOnto"));

    // Every band is at least L1.
    let out = oquare(d.path(), &["evaluate", "worked.json", "--json", "--fail-below", "L1"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_config_file_applies() {
    let d = workspace();
    fs::write(
        d.path().join("oquare.toml"),
        "[metrics]\nroot_policy = \"include\"\n[report]\nformat = \"json\"\nfail_below = \"L2\"\n",
    )
    .unwrap();
    let out = oquare(d.path(), &["evaluate", "worked.json"]);
    assert_eq!(out.status.code(), Some(3));
    let report = stdout_json(&out);
    assert_eq!(report["root_policy"], "include");
}

#[test]
fn test_malformed_config_exits_1() {
    let d = workspace();
    fs::write(d.path().join("oquare.toml"), "[metrics\n").unwrap();
    assert_eq!(oquare(d.path(), &["evaluate", "worked.json"]).status.code(), Some(1));
}

#[test]
fn test_compare_json() {
    let d = workspace();
    fs::write(d.path().join("a.json"), r#"{"X": 10, "Y": 2}"#).unwrap();
    fs::write(d.path().join("b.json"), r#"{"X": 15, "Y": 2}"#).unwrap();

    let out = oquare(d.path(), &["compare", "a.json", "b.json", "--json", "--name1", "old"]);
    assert_eq!(out.status.code(), Some(0));
    let cmp = stdout_json(&out);
    assert_eq!(cmp["name_a"], "old");
    assert_eq!(cmp["name_b"], "b");
    assert_eq!(cmp["summary"]["improved"], 1);
    assert_eq!(cmp["summary"]["unchanged"], 1);
    assert_eq!(cmp["entries"][0]["name"], "X");
    assert_eq!(cmp["entries"][0]["percent_change"], 50.0);
}

#[test]
fn test_compare_report_files() {
    let d = workspace();
    let out = oquare(d.path(), &["evaluate", "worked.json", "--out", "v1.json"]);
    assert_eq!(out.status.code(), Some(0));
    let out = oquare(d.path(), &["evaluate", "worked.json", "--include-root", "--out", "v2.json"]);
    assert_eq!(out.status.code(), Some(0));

    let out = oquare(d.path(), &["compare", "v1.json", "v2.json", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let cmp = stdout_json(&out);
    assert_eq!(cmp["name_a"], "worked");
    assert_eq!(cmp["summary"]["total"], 14);
}

#[test]
fn test_compare_same_file_exits_2() {
    let d = workspace();
    fs::write(d.path().join("a.json"), r#"{"X": 1}"#).unwrap();
    let out = oquare(d.path(), &["compare", "a.json", "./a.json"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_evolution_json() {
    let d = workspace();
    for (date, value) in [("2025-02-01", 3.0), ("2025-01-01", 2.0), ("2025-03-01", 1.5)] {
        let dir = d.path().join("history").join(date);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("metrics.json"), format!(r#"{{"LCOMOnto": {value}}}"#)).unwrap();
    }
    fs::write(d.path().join("history/2025-03-01/notes.txt"), "ignored").unwrap();

    let out = oquare(d.path(), &["evolution", "history", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let evo = stdout_json(&out);
    assert_eq!(evo["labels"][0], "2025-01-01");
    assert_eq!(evo["labels"][2], "2025-03-01");
    assert_eq!(evo["series"]["LCOMOnto"]["2025-02-01"], 3.0);
    assert_eq!(evo["steps"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_evolution_missing_dir_exits_2() {
    let d = workspace();
    assert_eq!(oquare(d.path(), &["evolution", "nowhere"]).status.code(), Some(2));
}

#[test]
fn test_no_subcommand_prints_help() {
    let d = workspace();
    let out = oquare(d.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("evaluate"));
}
