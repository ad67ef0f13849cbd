//! JSON reports for violations.

use serde_json::{json, Map, Value};

use crate::error::{Violation, Violations};

/// Trait for converting diagnostics to a JSON report.
pub trait ToJson {
    /// Converts this value to a `serde_json::Value`.
    fn to_json(&self) -> Value;
}

impl ToJson for Violation {
    /// Produces an object with `code`, `message` and `path`, plus
    /// `expected`, `got`, `cause` and `causes` when present.
    ///
    /// ```rust
    /// use verdict::{checks::ordered, ToJson};
    /// use serde_json::json;
    ///
    /// let violation = ordered::min(5).at_field("qty").validate(&4).unwrap_err();
    /// assert_eq!(
    ///     violation.to_json(),
    ///     json!({
    ///         "code": "min",
    ///         "message": "4 must be at least 5",
    ///         "path": "qty",
    ///         "expected": ">= 5",
    ///         "got": "4"
    ///     })
    /// );
    /// ```
    fn to_json(&self) -> Value {
        let mut report = Map::new();
        report.insert("code".to_string(), json!(self.code));
        report.insert("message".to_string(), json!(self.message));
        report.insert("path".to_string(), json!(self.path.to_string()));

        if let Some(ref expected) = self.expected {
            report.insert("expected".to_string(), json!(expected));
        }
        if let Some(ref got) = self.got {
            report.insert("got".to_string(), json!(got));
        }
        if let Some(cause) = self.cause() {
            report.insert("cause".to_string(), cause.to_json());
        }
        if self.is_joined() {
            let causes: Vec<Value> = self.causes().iter().map(|c| c.to_json()).collect();
            report.insert("causes".to_string(), Value::Array(causes));
        }

        Value::Object(report)
    }
}

impl ToJson for Violations {
    /// Produces `{"violations": [...]}` in accumulation order.
    fn to_json(&self) -> Value {
        json!({
            "violations": self.iter().map(|v| v.to_json()).collect::<Vec<_>>()
        })
    }
}
