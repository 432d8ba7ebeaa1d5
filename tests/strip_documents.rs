//! Fixture-document tests for the strip pipeline
//!
//! Whole sample files run through the public API and compared against
//! checked-in expected outputs: a banner-headed file with every comment
//! shape, and documents whose string literals are full of comment
//! look-alikes.

use decomment::{strip_all, strip_block, strip_first, strip_line, StripOptions};
use rstest::rstest;
use std::fs;

fn read(path: &str) -> String {
    fs::read_to_string(path).expect("failed to read test document")
}

#[test]
fn test_strip_all_document() {
    let fixture = read("tests/fixtures/strip-all.js");
    let expected = read("tests/expected/strip-all.js");
    assert_eq!(strip_all(&fixture, &StripOptions::default()), expected);
}

#[test]
fn test_strip_all_document_is_idempotent() {
    let fixture = read("tests/fixtures/strip-all.js");
    let once = strip_all(&fixture, &StripOptions::default());
    assert_eq!(strip_all(&once, &StripOptions::default()), once);
}

#[test]
fn test_strip_block_keeps_protected_banners_in_safe_mode() {
    let fixture = read("tests/fixtures/strip-all.js");
    let expected = read("tests/expected/strip-keep-block.js");
    let actual = strip_block(&fixture, &StripOptions::default().safe(true));
    assert_eq!(actual, expected);
}

#[test]
fn test_strip_line_keeps_protected_comments_in_safe_mode() {
    let fixture = read("tests/fixtures/strip-keep-line.js");
    let expected = read("tests/expected/strip-keep-line.js");
    let actual = strip_line(&fixture, &StripOptions::default().safe(true));
    assert_eq!(actual, expected);
}

#[test]
fn test_strip_all_preserving_newlines_keeps_line_numbers() {
    let fixture = read("tests/fixtures/strip-all.js");
    let expected = read("tests/expected/strip-keep-newlines.js");
    let actual = strip_all(&fixture, &StripOptions::default().preserve_newlines(true));
    assert_eq!(actual, expected);
    assert_eq!(
        actual.matches('\n').count(),
        fixture.matches('\n').count()
    );
}

#[test]
fn test_strip_first_removes_only_the_banner() {
    let fixture = read("tests/fixtures/banner.js");
    let expected = read("tests/expected/banner-first.js");
    assert_eq!(strip_first(&fixture, &StripOptions::default()), expected);
}

#[test]
fn test_strip_first_skips_a_protected_banner() {
    let fixture = read("tests/fixtures/banner.js");
    let expected = read("tests/expected/banner-first-protected.js");
    let actual = strip_first(&fixture, &StripOptions::default().safe(true));
    assert_eq!(actual, expected);
}

#[rstest]
#[case("tests/fixtures/no-comment.js")]
#[case("tests/fixtures/quoted-strings.js")]
#[case("tests/fixtures/config.js")]
fn test_documents_without_comments_come_back_untouched(#[case] path: &str) {
    let fixture = read(path);
    assert_eq!(strip_all(&fixture, &StripOptions::default()), fixture);
}
