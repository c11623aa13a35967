//! End-to-end tests for the rslkit binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn rslkit() -> Command {
    Command::cargo_bin("rslkit").unwrap()
}

#[test]
fn test_init_prints_canonical_document() {
    let output = rslkit()
        .args(["init", "https://ex.com/a", "https://ex.com/b"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let xml = String::from_utf8(output).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<rsl xmlns=\"https://rslstandard.org/rsl\">"));
    assert!(xml.contains("<content url=\"https://ex.com/a\" lastmod="));
    assert!(xml.contains("<content url=\"https://ex.com/b\" lastmod="));
    assert!(xml.contains("<payment type=\"free\"/>"));
}

#[test]
fn test_init_commercial_includes_price() {
    rslkit()
        .args([
            "init",
            "https://ex.com/a",
            "--license-type",
            "commercial",
            "--amount",
            "5",
            "--currency",
            "EUR",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<permits type=\"usage\">all</permits>"))
        .stdout(predicate::str::contains("<amount currency=\"EUR\">5</amount>"));
}

#[test]
fn test_init_unknown_license_type_fails() {
    rslkit()
        .args(["init", "https://ex.com/a", "--license-type", "enterprise"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown license type"));
}

#[test]
fn test_init_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsl.xml");

    rslkit()
        .args(["init", "https://ex.com/a", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.contains("<content url=\"https://ex.com/a\""));
}

#[test]
fn test_validate_accepts_generated_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsl.xml");

    rslkit()
        .args(["init", "https://ex.com/a", "--output"])
        .arg(&path)
        .assert()
        .success();

    rslkit()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid:"));
}

#[test]
fn test_validate_rejects_content_without_licenses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsl.xml");
    fs::write(
        &path,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rsl xmlns=\"https://rslstandard.org/rsl\">\n\
         \x20 <content url=\"https://ex.com/a\"></content>\n\
         </rsl>\n",
    )
    .unwrap();

    rslkit()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("at least one license"))
        .stderr(predicate::str::contains("Document is invalid"));
}

#[test]
fn test_validate_comprehensive_warns_but_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsl.xml");
    // A structurally complete document whose payment type has no details.
    fs::write(
        &path,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rsl xmlns=\"https://rslstandard.org/rsl\">\n\
         \x20 <content url=\"https://ex.com/a\">\n\
         \x20   <license>\n\
         \x20     <permits type=\"usage\">search</permits>\n\
         \x20     <payment type=\"purchase\"/>\n\
         \x20   </license>\n\
         \x20 </content>\n\
         </rsl>\n",
    )
    .unwrap();

    rslkit()
        .args(["validate", "--comprehensive"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no payment details"))
        .stdout(predicate::str::contains("Valid:"));
}

#[test]
fn test_format_produces_canonical_fixed_point() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsl.xml");
    // Non-canonical whitespace and token padding.
    fs::write(
        &path,
        "<rsl xmlns=\"https://rslstandard.org/rsl\"><content url=\"https://ex.com/a\">\
         <license><permits type=\"usage\"> search , ai-train </permits></license>\
         </content></rsl>",
    )
    .unwrap();

    let first = rslkit()
        .arg("format")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let formatted = String::from_utf8(first).unwrap();
    assert!(formatted.contains("<permits type=\"usage\">search,ai-train</permits>"));

    // Formatting the formatted output changes nothing.
    fs::write(&path, &formatted).unwrap();
    let second = rslkit()
        .arg("format")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(formatted, String::from_utf8(second).unwrap());
}

#[test]
fn test_format_write_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rsl.xml");
    fs::write(
        &path,
        "<rsl><content url=\"https://ex.com/a\"><license>\
         <permits type=\"usage\">search</permits></license></content></rsl>",
    )
    .unwrap();

    rslkit()
        .args(["format", "--write"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted:"));

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(rewritten.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
}

#[test]
fn test_validate_missing_file_fails_with_io_error() {
    rslkit()
        .args(["validate", "/nonexistent/rsl.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_embed_robots_prints_directive() {
    rslkit()
        .args(["embed", "robots", "https://ex.com/rsl.xml"])
        .assert()
        .success()
        .stdout("License: https://ex.com/rsl.xml\n");
}

#[test]
fn test_embed_html_prints_link_tag() {
    rslkit()
        .args(["embed", "html", "https://ex.com/rsl.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<link rel=\"license\" type=\"application/rsl+xml\" href=\"https://ex.com/rsl.xml\">",
        ));
}
