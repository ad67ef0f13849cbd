//! Integration tests for JSON violation reports.

use serde_json::json;
use stillwater::Validation;
use verdict::checks::{comparable, slice, string};
use verdict::{join, validate, Check, ToJson, Violation};

#[test]
fn test_joined_report() {
    let checks: Vec<Check<str>> = vec![comparable::not_empty(), string::contains("@")];

    let report = join("", &checks).unwrap_err().to_json();

    assert_eq!(report["code"], "joined");
    assert_eq!(report["message"], "validation failed with 2 violation(s)");
    assert_eq!(report["causes"][0]["code"], "not_empty");
    assert_eq!(report["causes"][1]["code"], "contains");
    assert_eq!(report["causes"][1]["got"], "");
}

#[test]
fn test_each_report_carries_element_paths() {
    let check = slice::each([string::min_len(2).lift::<&str>()]);

    let report = check.validate(&["ok", "x"]).unwrap_err().to_json();

    assert_eq!(
        report["causes"],
        json!([{
            "code": "min_len",
            "message": "must contain at least 2 bytes",
            "path": "[1]",
            "expected": "at least 2 bytes",
            "got": "1 bytes"
        }])
    );
}

#[test]
fn test_wrapped_report() {
    let check = string::numeric().wrap_error(Violation::new("bad zip code").with_code("zip"));

    let report = check.validate("12a45").unwrap_err().to_json();

    assert_eq!(report["code"], "zip");
    assert_eq!(report["cause"]["code"], "numeric");
    assert_eq!(report["cause"]["got"], "'a'");
}

#[test]
fn test_violations_report() {
    match validate("", &[comparable::not_empty(), string::min_len(3)]) {
        Validation::Failure(violations) => {
            let report = violations.to_json();
            assert_eq!(report["violations"].as_array().map(Vec::len), Some(2));
        }
        Validation::Success(_) => panic!("expected failure"),
    }
}
