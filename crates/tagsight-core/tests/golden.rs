use std::fs;
use std::path::Path;

use tagsight_core::{Report, analyze_hexdump_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.hex");
    let expected = load_expected_report(dir);

    let mut actual = analyze_hexdump_file(&input).expect("analyze hex dump");
    actual.generated_at = expected.generated_at.clone();
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_tagread() {
    run_golden("tests/golden/tagread");
}

#[test]
fn golden_mixed() {
    run_golden("tests/golden/mixed");
}

#[test]
fn golden_reports_are_deterministic() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join("tests/golden/mixed").join("input.hex");

    let first = analyze_hexdump_file(&input).expect("first run");
    let second = analyze_hexdump_file(&input).expect("second run");

    let first_value = serde_json::to_value(first).expect("serialize first");
    let second_value = serde_json::to_value(second).expect("serialize second");
    assert_eq!(first_value, second_value);
}
