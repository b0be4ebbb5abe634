//! Forgiving field deserializers for form payloads.
//!
//! Onboarding and profile forms post whatever shape the client state happens
//! to hold. These helpers accept any JSON value and keep only the shape we
//! understand, so a stray number or object never rejects the whole request.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Keeps a field only if it is a JSON string. Anything else reads as absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Keeps the string elements of a JSON array. Non-arrays read as empty.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Reads a JSON array of records. Non-arrays read as empty; elements that do
/// not deserialize fall back to `T::default()` so positions are preserved.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => parse_records(items),
        _ => Vec::new(),
    })
}

/// Reads a single record. Null or absent reads as `None`, an object is
/// parsed leniently, and any other shape reads as an empty record.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(item @ Value::Object(_)) => Some(serde_json::from_value(item).unwrap_or_default()),
        Some(_) => Some(T::default()),
    })
}

/// Element-wise record parse; an element that does not fit becomes `T::default()`.
pub fn parse_records<T>(items: Vec<Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}

/// Truthiness of an arbitrary JSON value, as a browser form would see it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Non-blank after trimming.
pub fn has_text(field: &Option<String>) -> bool {
    field.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}
