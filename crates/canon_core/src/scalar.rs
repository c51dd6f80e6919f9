//! Lenient scalar decoding.
//!
//! Canon authors write dates and episode markers as bare YAML scalars
//! (`date: 2020`, `first_appearance: S01E01`), so fields that are text in
//! meaning accept any scalar and keep its textual form.

use serde::{Deserialize, Deserializer, de::Error};
use serde_yaml::Value;

/// Renders a YAML scalar as text; `None` for null and for collections.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Deserializes an optional scalar into its textual form.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(D::Error::custom("expected a scalar value"))
        }
        other => Ok(scalar_text(&other)),
    }
}

/// Deserializes a scalar into its textual form, null becoming empty text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}
