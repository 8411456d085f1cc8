use anyhow::Result;
use package_sorter::{sort_record, validate_package, PackageCategory, PackageMeasurement};
use serde_json::{json, Value};

fn rejection(candidate: Value) -> String {
    match validate_package(&candidate) {
        Ok(m) => panic!("expected rejection, got {:?}", m),
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_missing_properties() {
    assert_eq!(
        rejection(json!({"height": 10, "length": 10, "mass": 5})),
        "Package is missing required property: width"
    );
    assert_eq!(
        rejection(json!({"width": 10, "length": 10, "mass": 5})),
        "Package is missing required property: height"
    );
    assert_eq!(
        rejection(json!({"width": 10, "height": 10, "mass": 5})),
        "Package is missing required property: length"
    );
    assert_eq!(
        rejection(json!({"width": 10, "height": 10, "length": 10})),
        "Package is missing required property: mass"
    );
}

#[test]
fn test_empty_record_cites_width_first() {
    assert_eq!(rejection(json!({})), "Package is missing required property: width");
}

#[test]
fn test_non_number_properties() {
    let cases = [
        (json!({"width": "10", "height": 10, "length": 10, "mass": 5}), "width"),
        (json!({"width": 10, "height": "10", "length": 10, "mass": 5}), "height"),
        (json!({"width": 10, "height": 10, "length": "10", "mass": 5}), "length"),
        (json!({"width": 10, "height": 10, "length": 10, "mass": "5"}), "mass"),
        (json!({"width": null, "height": 10, "length": 10, "mass": 5}), "width"),
        (json!({"width": {}, "height": 10, "length": 10, "mass": 5}), "width"),
        (json!({"width": 10, "height": 10, "length": 10, "mass": [5]}), "mass"),
        (json!({"width": 10, "height": true, "length": 10, "mass": 5}), "height"),
    ];

    for (candidate, field) in cases {
        assert_eq!(rejection(candidate), format!("Package {} must be a number", field));
    }
}

#[test]
fn test_type_check_precedes_range_check() {
    // "NaN" as a string is a type error, not a NaN error
    assert_eq!(
        rejection(json!({"width": "NaN", "height": -1, "length": 0, "mass": 5})),
        "Package width must be a number"
    );
}

#[test]
fn test_non_positive_values() {
    assert_eq!(
        rejection(json!({"width": -10, "height": 10, "length": 10, "mass": 5})),
        "Package width must be greater than zero"
    );
    assert_eq!(
        rejection(json!({"width": 10, "height": 10, "length": 10, "mass": 0})),
        "Package mass must be greater than zero"
    );
    assert_eq!(
        rejection(json!({"width": 0, "height": 0, "length": 0, "mass": 0})),
        "Package width must be greater than zero"
    );
}

#[test]
fn test_valid_record_with_extra_fields() -> Result<()> {
    let m = validate_package(&json!({
        "width": 10, "height": 10, "length": 10, "mass": 5, "label": "fragile"
    }))?;
    assert_eq!(m, PackageMeasurement::new(10.0, 10.0, 10.0, 5.0));
    Ok(())
}

#[test]
fn test_sort_record() -> Result<()> {
    let record: Value =
        serde_json::from_str(r#"{"width": 100, "height": 100, "length": 100, "mass": 20}"#)?;
    assert_eq!(sort_record(&record)?, PackageCategory::Rejected);

    let err = sort_record(&json!("package")).unwrap_err();
    assert_eq!(err.message(), "Package must be an object");
    Ok(())
}
