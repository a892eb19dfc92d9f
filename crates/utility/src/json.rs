//! Tolerant access to loosely shaped JSON objects.
//!
//! Backends evolve: a field may be renamed, sent as `null`, or sent as a
//! string where a number is expected. These helpers treat all of that as
//! "absent" instead of failing the whole document.

use serde_json::Value;

/// Returns the first of `keys` present on `object` with a non-null value.
pub fn first_present<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(key))
        .find(|value| !value.is_null())
}

/// Reads a finite number, accepting numeric strings such as `"5.50"`.
pub fn as_lenient_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Reads a non-negative integer, accepting integral floats and numeric strings.
pub fn as_lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && *float >= 0.0)
                .map(|float| float as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Shortcut for `first_present` followed by `as_lenient_f64`.
pub fn f64_field(object: &Value, keys: &[&str]) -> Option<f64> {
    first_present(object, keys).and_then(as_lenient_f64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn first_present_skips_null_and_missing() {
        let object = json!({ "id": null, "trip_id": 7 });
        assert_eq!(first_present(&object, &["id", "trip_id"]), Some(&json!(7)));
        assert_eq!(first_present(&object, &["missing"]), None);
    }

    #[test]
    fn first_present_keeps_priority_order() {
        let object = json!({ "id": 1, "trip_id": 2 });
        assert_eq!(first_present(&object, &["id", "trip_id"]), Some(&json!(1)));
    }

    #[test]
    fn numbers_from_strings() {
        assert_eq!(as_lenient_f64(&json!("5.50")), Some(5.5));
        assert_eq!(as_lenient_f64(&json!("n/a")), None);
        assert_eq!(as_lenient_f64(&json!(true)), None);
        assert_eq!(as_lenient_u64(&json!("42")), Some(42));
        assert_eq!(as_lenient_u64(&json!(42.0)), Some(42));
        assert_eq!(as_lenient_u64(&json!(4.2)), None);
        assert_eq!(as_lenient_u64(&json!(-1)), None);
    }
}
