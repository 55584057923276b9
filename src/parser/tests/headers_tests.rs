//! Tests for the header registry

use crate::parser::Headers;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_headers_keep_column_order() {
    let headers = Headers::from_names(names(&["fdc_id", "data_type", "description"]));

    assert_eq!(headers.len(), 3);
    assert_eq!(headers.get(0), Some("fdc_id"));
    assert_eq!(headers.get(2), Some("description"));
    assert_eq!(headers.get(3), None);
    assert_eq!(headers.as_slice(), &names(&["fdc_id", "data_type", "description"])[..]);
}

#[test]
fn test_header_position_lookup() {
    let headers = Headers::from_names(names(&["id", "name"]));

    assert_eq!(headers.position("id"), Some(0));
    assert_eq!(headers.position("name"), Some(1));
    assert_eq!(headers.position("Abbreviation"), None);
    assert!(headers.contains("name"));
    assert!(!headers.contains("NAME"));
}

#[test]
fn test_duplicate_header_resolves_to_first_position() {
    let headers = Headers::from_names(names(&["id", "name", "id"]));

    assert_eq!(headers.len(), 3);
    assert_eq!(headers.position("id"), Some(0));
}

#[test]
fn test_empty_headers() {
    let headers = Headers::empty();

    assert!(headers.is_empty());
    assert_eq!(headers.len(), 0);
    assert_eq!(headers.iter().count(), 0);
}

#[test]
fn test_extending_a_copy_leaves_headers_unchanged() {
    let headers = Headers::from_names(names(&["id", "name"]));

    let mut copy = headers.as_slice().to_vec();
    copy.push("3".to_string());

    assert_eq!(copy.len(), 3);
    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get(2), None);
}

#[test]
fn test_iterate_headers() {
    let headers = Headers::from_names(names(&["id", "name"]));

    let collected: Vec<&String> = (&headers).into_iter().collect();
    assert_eq!(collected, vec!["id", "name"]);
}
