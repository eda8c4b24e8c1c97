//! Serde helper functions for service response deserialization.
//!
//! The messaging service is loose about scalar types: ID-like fields come
//! back as `"1"` or `1` depending on the endpoint, and flag-like fields may
//! be booleans. These helpers normalize every scalar to its string form
//! while keeping `null` and absent fields as `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional scalar field into its string form.
///
/// Strings pass through unchanged (empty strings stay `Some("")`, which is
/// distinct from an absent field), numbers and booleans are rendered with
/// their display form, and `null` becomes `None`.
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {other}"
        ))),
    }
}
