//! Blur-check behaviour over an in-memory class list
//!
//! Each test drives `check_field` the way a blur listener does and inspects
//! the marker class afterwards.
use std::collections::BTreeSet;

use academy_forms_validation::{
    check_field, ClassList, FieldKind, MarkerState, ValidatorConfig, DEFAULT_MARKER_CLASS,
};
use rstest::rstest;

fn blur(kind: FieldKind, value: &str, classes: &mut BTreeSet<String>) -> MarkerState {
    check_field(kind, value, classes, DEFAULT_MARKER_CLASS).unwrap()
}

#[rstest]
#[case::valid_index(FieldKind::IndexNumber, "12345678901/2024", false)]
#[case::short_index(FieldKind::IndexNumber, "1234567890/2024", true)]
#[case::valid_phone(FieldKind::Phone, "254712345678", false)]
#[case::local_phone(FieldKind::Phone, "0712345678", true)]
#[case::empty_phone(FieldKind::Phone, "", true)]
#[case::empty_index(FieldKind::IndexNumber, "", true)]
fn test_marker_after_blur(#[case] kind: FieldKind, #[case] value: &str, #[case] marked: bool) {
    let mut classes = BTreeSet::new();

    let state = blur(kind, value, &mut classes);

    assert_eq!(state.is_marked(), marked);
    assert_eq!(classes.contains(DEFAULT_MARKER_CLASS), marked);
}

#[rstest]
#[case(FieldKind::IndexNumber, "12345678901/2024")]
#[case(FieldKind::IndexNumber, "not an index")]
#[case(FieldKind::Phone, "254712345678")]
#[case(FieldKind::Phone, "")]
fn test_reblur_unchanged_value_keeps_state(#[case] kind: FieldKind, #[case] value: &str) {
    let mut classes = BTreeSet::new();

    let first = blur(kind, value, &mut classes);
    let snapshot = classes.clone();
    let second = blur(kind, value, &mut classes);

    assert_eq!(first, second);
    assert_eq!(classes, snapshot);
}

#[test]
fn test_correcting_value_removes_marker() {
    let mut classes: BTreeSet<String> = ["form-control".to_string()].into();

    assert_eq!(
        blur(FieldKind::Phone, "0712345678", &mut classes),
        MarkerState::MarkedInvalid
    );
    assert!(classes.contains(DEFAULT_MARKER_CLASS));

    assert_eq!(
        blur(FieldKind::Phone, "254712345678", &mut classes),
        MarkerState::Unmarked
    );
    assert!(!classes.contains(DEFAULT_MARKER_CLASS));
    assert!(classes.contains("form-control"));
}

#[test]
fn test_marker_matches_pattern_for_sample_values() {
    let samples = [
        "",
        "12345678901/2024",
        "254712345678",
        "2547123456789",
        "12345678901/20245",
        "abcdefghijk/abcd",
        "254 712 345 678",
        "12345678901\\2024",
    ];

    for kind in FieldKind::ALL {
        for value in samples {
            let mut classes = BTreeSet::new();
            let state = blur(kind, value, &mut classes);
            assert_eq!(
                state.is_marked(),
                !kind.is_valid(value),
                "{kind} with {value:?}"
            );
            assert_eq!(classes.marker_state(DEFAULT_MARKER_CLASS), state);
        }
    }
}

#[test]
fn test_custom_marker_class_from_config() {
    let config: ValidatorConfig = serde_json::from_str(r#"{"markerClass": "has-error"}"#).unwrap();
    config.validate().unwrap();

    let mut classes = BTreeSet::new();
    check_field(FieldKind::IndexNumber, "bad", &mut classes, &config.marker_class).unwrap();

    assert!(classes.contains("has-error"));
    assert!(!classes.contains(DEFAULT_MARKER_CLASS));
}
