// SPDX-License-Identifier: MPL-2.0
//! Tolerant field decoders for backend payloads.
//!
//! The backend is loose about JSON types: numeric columns sometimes arrive as
//! strings, identifiers can be integers or UUID strings, and any field may be
//! `null`. These helpers normalise that at the serde boundary so the rest of
//! the crate works with plain `String` / `f64` values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier that may be a string or an integer. `null` becomes `""`.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.unwrap_or_default())
}

/// Optional text; numbers and booleans are stringified.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Optional number; numeric strings are parsed, anything else is `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|n| n.is_finite()))
}

/// Boolean flag; `null` and unknown shapes are `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "1"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::id")]
        id: String,
        #[serde(default, deserialize_with = "super::text")]
        name: Option<String>,
        #[serde(default, deserialize_with = "super::number")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "super::flag")]
        active: bool,
    }

    #[test]
    fn accepts_integer_ids_and_numeric_strings() {
        let row: Row =
            serde_json::from_str(r#"{"id": 42, "amount": "1500.50", "active": 1}"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.amount, Some(1500.5));
        assert!(row.active);
        assert!(row.name.is_none());
    }

    #[test]
    fn nulls_and_garbage_become_empty() {
        let row: Row = serde_json::from_str(
            r#"{"id": null, "name": null, "amount": "abc", "active": null}"#,
        )
        .unwrap();
        assert_eq!(row.id, "");
        assert!(row.name.is_none());
        assert!(row.amount.is_none());
        assert!(!row.active);
    }
}
