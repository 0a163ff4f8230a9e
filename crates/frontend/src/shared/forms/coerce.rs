//! Value coercion: once at the input boundary for numeric fields, once
//! when the submit payload is assembled.

use serde_json::Value;

use super::{Coerce, FieldValue};

/// Coerce raw input-event text for a numeric field. Non-numeric text
/// becomes the empty value; it never propagates upward and never panics.
pub fn coerce_numeric(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.parse::<f64>().is_ok() {
        trimmed.to_string()
    } else {
        String::new()
    }
}

fn numeric_json(text: &str) -> Value {
    if let Ok(n) = text.trim().parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = text.trim().parse::<f64>() {
        return Value::from(f);
    }
    Value::Null
}

/// Render one field value into the JSON payload.
pub fn payload_value(coerce: Coerce, value: &FieldValue) -> Value {
    match coerce {
        Coerce::Custom(f) => f(value),
        Coerce::Numeric => match value {
            FieldValue::Text(text) if text.trim().is_empty() => Value::Null,
            FieldValue::Text(text) => numeric_json(text),
            FieldValue::Flag(checked) => Value::from(*checked),
            FieldValue::Many(values) => Value::Array(
                values
                    .iter()
                    .map(|v| numeric_json(v))
                    .filter(|v| !v.is_null())
                    .collect(),
            ),
        },
        Coerce::Date => match value {
            FieldValue::Text(text) if text.trim().is_empty() => Value::Null,
            FieldValue::Text(text) => Value::from(text.trim()),
            other => plain_json(other),
        },
        Coerce::None => plain_json(value),
    }
}

fn plain_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::from(text.clone()),
        FieldValue::Flag(checked) => Value::from(*checked),
        FieldValue::Many(values) => {
            Value::Array(values.iter().map(|v| Value::from(v.clone())).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_numeric_input_becomes_empty() {
        assert_eq!(coerce_numeric("abc"), "");
        assert_eq!(coerce_numeric("12x"), "");
        assert_eq!(coerce_numeric(""), "");
    }

    #[test]
    fn numeric_input_passes_through() {
        assert_eq!(coerce_numeric("42"), "42");
        assert_eq!(coerce_numeric(" 3.5 "), "3.5");
        assert_eq!(coerce_numeric("-7"), "-7");
    }

    #[test]
    fn numeric_payload_prefers_integers() {
        let v = FieldValue::Text("42".into());
        assert_eq!(payload_value(Coerce::Numeric, &v), json!(42));
        let f = FieldValue::Text("2.5".into());
        assert_eq!(payload_value(Coerce::Numeric, &f), json!(2.5));
        let blank = FieldValue::Text("".into());
        assert_eq!(payload_value(Coerce::Numeric, &blank), Value::Null);
    }

    #[test]
    fn numeric_many_parses_each_id() {
        let v = FieldValue::Many(vec!["1".into(), "2".into(), "x".into()]);
        assert_eq!(payload_value(Coerce::Numeric, &v), json!([1, 2]));
    }

    #[test]
    fn plain_payload_keeps_shapes() {
        assert_eq!(
            payload_value(Coerce::None, &FieldValue::Text("hi".into())),
            json!("hi")
        );
        assert_eq!(
            payload_value(Coerce::None, &FieldValue::Flag(true)),
            json!(true)
        );
        assert_eq!(
            payload_value(Coerce::None, &FieldValue::Many(vec!["a".into()])),
            json!(["a"])
        );
    }

    #[test]
    fn empty_date_is_null() {
        assert_eq!(
            payload_value(Coerce::Date, &FieldValue::Text(" ".into())),
            Value::Null
        );
        assert_eq!(
            payload_value(Coerce::Date, &FieldValue::Text("2024-01-31".into())),
            json!("2024-01-31")
        );
    }

    #[test]
    fn custom_transform_wins() {
        fn upper(value: &FieldValue) -> Value {
            Value::from(value.as_text().to_uppercase())
        }
        assert_eq!(
            payload_value(Coerce::Custom(upper), &FieldValue::Text("abc".into())),
            json!("ABC")
        );
    }
}
