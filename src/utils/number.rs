use serde_json::Value;

// Reads an integer the way form clients send it: 4, 4.0 or "4".
// Fractional floats and anything else are rejected.
pub fn as_lax_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64().filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64).map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub mod lax_int {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;
    use serde_json::Value;
    use crate::utils::number::as_lax_int;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        as_lax_int(&value).ok_or_else(|| D::Error::custom(format!("invalid integer {}", value)))
    }
}

pub mod lax_opt_int {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;
    use serde_json::Value;
    use crate::utils::number::as_lax_int;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            value => as_lax_int(&value).map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid integer {}", value))),
        }
    }
}
