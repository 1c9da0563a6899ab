//! Conversion from `serde_json::Value`
//!
//! JSON documents are trees, so the result never contains sharing or
//! cycles. Object key order follows the parsed map.

use super::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => Value::sequence_from(items),
            serde_json::Value::Object(map) => Value::record_from(map),
        }
    }
}
