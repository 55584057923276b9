//! Tests for quote-anchored field scanning

use super::FOOD_LINE;
use crate::tokenizer::scanner::{FieldScanner, FieldSpan};

fn scanner() -> FieldScanner {
    FieldScanner::new('"', ',')
}

fn slices(line: &str) -> Vec<&str> {
    scanner()
        .scan(line)
        .iter()
        .map(|span| span.slice(line))
        .collect()
}

#[test]
fn test_scan_two_fields() {
    let spans = scanner().scan(r#""1000","cup""#);

    assert_eq!(
        spans,
        vec![
            FieldSpan { start: 0, end: 6 },
            FieldSpan { start: 7, end: 12 }
        ]
    );
}

#[test]
fn test_scan_delimiter_inside_content() {
    assert_eq!(
        slices(r#""MORINAGA, MORI-NU, TOFU","2019-04-01""#),
        vec![r#""MORINAGA, MORI-NU, TOFU""#, r#""2019-04-01""#]
    );
}

#[test]
fn test_scan_empty_fields() {
    assert_eq!(
        slices(FOOD_LINE),
        vec![
            r#""1105904""#,
            r#""branded_food""#,
            r#""WESSON Vegetable Oil 1 GAL""#,
            r#""""#,
            r#""2020-11-13""#
        ]
    );

    assert_eq!(slices(r#""a","""#), vec![r#""a""#, r#""""#]);
}

#[test]
fn test_scan_unquoted_line_has_no_fields() {
    assert!(scanner().scan("1000,cup").is_empty());
    assert!(!scanner().contains_field("1000,cup"));
    assert!(!scanner().is_well_formed("1000,cup"));
}

#[test]
fn test_scan_partially_quoted_line() {
    let line = r#""1000",cup"#;

    assert_eq!(slices(line), vec![r#""1000""#]);
    assert!(!scanner().is_well_formed(line));
}

#[test]
fn test_whitespace_before_quote_is_not_a_boundary() {
    let line = r#""a", "b""#;

    assert_eq!(slices(line), vec![r#""a""#]);
    assert!(!scanner().is_well_formed(line));
}

#[test]
fn test_well_formed_lines() {
    assert!(scanner().is_well_formed(r#""1000","cup""#));
    assert!(scanner().is_well_formed(FOOD_LINE));
    assert!(scanner().is_well_formed(r#""single""#));
    assert!(!scanner().is_well_formed(""));
    assert!(!scanner().is_well_formed(r#""a",,"b""#));
}

#[test]
fn test_scan_tab_delimiter() {
    let tab = FieldScanner::new('"', '\t');
    let line = "\"a\"\t\"b\"";

    assert_eq!(tab.scan(line).len(), 2);
    assert!(tab.is_well_formed(line));
}

#[test]
fn test_scan_single_quote_fields() {
    let single = FieldScanner::new('\'', ';');
    let line = "'O Brien';'42'";

    let spans: Vec<&str> = single.scan(line).iter().map(|s| s.slice(line)).collect();

    assert_eq!(spans, vec!["'O Brien'", "'42'"]);
    assert!(single.is_well_formed(line));
}

#[test]
fn test_scan_multibyte_content() {
    let line = r#""crème brûlée","ø""#;

    assert_eq!(slices(line), vec![r#""crème brûlée""#, r#""ø""#]);
}

#[test]
fn test_scan_long_line_of_adjacent_fields() {
    let line = r#""a","#.repeat(20_000);
    let line = line.trim_end_matches(',');

    let spans = scanner().scan(line);

    assert_eq!(spans.len(), 20_000);
    assert_eq!(spans[19_999].slice(line), r#""a""#);
    assert!(scanner().is_well_formed(line));
}
