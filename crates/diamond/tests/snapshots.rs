//! Snapshot tests for rendered diamonds
//!
//! These tests compare rendered output against golden files in tests/fixtures/.
//! To update fixtures after an intended layout change, run the tests with UPDATE_FIXTURES=1

use diamond::{render_with_config, LineEnding, Padding, RenderConfig};
use std::fs;
use std::path::Path;

/// Compare rendered output to a fixture file
fn assert_fixture(name: &str, input: &str, padding: Padding) {
    let config = RenderConfig::new(padding, LineEnding::Lf);
    let output = render_with_config(input, config).expect("render should succeed");
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.txt", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&fixture_path, &output).expect("failed to write fixture");
        println!("Updated fixture: {}", fixture_path.display());
        return;
    }

    let expected = fs::read_to_string(&fixture_path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            fixture_path.display(),
            output
        )
    });
    // Checkouts with autocrlf turn fixture newlines into \r\n
    let expected = expected.replace("\r\n", "\n");

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\n=== Diff ===\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

#[test]
fn test_letter_a() {
    assert_fixture("letter_a", "a", Padding::Symmetric);
}

#[test]
fn test_letter_c() {
    assert_fixture("letter_c", "c", Padding::Symmetric);
}

#[test]
fn test_letter_x() {
    assert_fixture("letter_x", "x", Padding::Symmetric);
}

#[test]
fn test_letter_x_leading() {
    assert_fixture("letter_x_leading", "x", Padding::Leading);
}

#[test]
fn test_letter_upper_z() {
    assert_fixture("letter_upper_z", "Z", Padding::Symmetric);
}

#[test]
fn test_numeral_9() {
    assert_fixture("numeral_9", "9", Padding::Symmetric);
}

#[test]
fn test_numeral_12() {
    assert_fixture("numeral_12", "12", Padding::Symmetric);
}
