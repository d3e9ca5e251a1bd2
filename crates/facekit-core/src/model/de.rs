//! Lenient scalar deserializers.
//!
//! The service is inconsistent about scalar types: attribute values arrive as
//! `"true"`, `true`, `"male"` or `31` depending on the attribute, and group
//! ids flip between strings and integers. These helpers normalize any JSON
//! scalar to a `String`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn scalar_to_string<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected a scalar, found {other}"))),
    }
}

pub(crate) fn string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string::<D::Error>(value)?
        .ok_or_else(|| de::Error::custom("expected a scalar, found null"))
}

pub(crate) fn opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string::<D::Error>(value)
}
