//! Field extraction from untyped JSON records.
//!
//! This is the only place argument-type failures can happen: the typed API
//! takes `&str` and `i64`, so a wrong type there does not compile.

use serde_json::Value;

use crate::error::TypeMismatch;

/// Short type name of a JSON value, as shown in type errors.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "large integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn found(record: &Value, field: &str) -> &'static str {
    record.get(field).map_or("missing", type_name)
}

/// Read `field` as a string.
pub fn string_field<'a>(record: &'a Value, field: &str) -> Result<&'a str, TypeMismatch> {
    record
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| TypeMismatch::new(field, "a string", found(record, field)))
}

/// Read `field` as a signed 64-bit integer.
pub fn integer_field(record: &Value, field: &str) -> Result<i64, TypeMismatch> {
    record
        .get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| TypeMismatch::new(field, "an integer", found(record, field)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_field() {
        let record = json!({"name": "rose"});
        assert_eq!(string_field(&record, "name"), Ok("rose"));
    }

    #[test]
    fn test_string_field_wrong_type() {
        let record = json!({"name": 42});
        let err = string_field(&record, "name").expect_err("number is not a string");
        assert_eq!(err.found, "integer");
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_missing_field() {
        let record = json!({});
        let err = integer_field(&record, "age").expect_err("missing");
        assert_eq!(err.found, "missing");
    }

    #[test]
    fn test_integer_field_rejects_float_and_string() {
        let record = json!({"age": 1.5, "height": "10"});
        assert_eq!(
            integer_field(&record, "age").map_err(|e| e.found),
            Err("float")
        );
        assert_eq!(
            integer_field(&record, "height").map_err(|e| e.found),
            Err("string")
        );
    }

    #[test]
    fn test_integer_field_accepts_negative() {
        let record = json!({"age": -3});
        assert_eq!(integer_field(&record, "age"), Ok(-3));
    }
}
