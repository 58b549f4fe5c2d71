use serde::Serialize;
use serde_json::Value as JsonValue;

use super::error::{HhError, HhResult};

/// Flattens a parameter object into query/form pairs.
///
/// `null` fields are skipped, arrays repeat their key and scalars use their
/// plain text form, so `{"id": [1, 2], "text": null}` becomes `id=1&id=2`.
pub fn to_pairs<T: Serialize + ?Sized>(params: &T) -> HhResult<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let mut pairs = Vec::new();
    match value {
        JsonValue::Null => {}
        JsonValue::Object(map) => {
            for (key, value) in map {
                push_value(&mut pairs, &key, value)?;
            }
        }
        other => {
            return Err(HhError::InvalidRequest(format!(
                "query parameters must be an object, got {}",
                other
            )))
        }
    }
    Ok(pairs)
}

/// `field=a&field=b` for a list of ids.
pub fn repeated(field: &str, values: &[impl AsRef<str>]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (field.to_string(), v.as_ref().to_string()))
        .collect()
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: JsonValue) -> HhResult<()> {
    match value {
        JsonValue::Null => {}
        JsonValue::Array(items) => {
            for item in items {
                push_value(pairs, key, item)?;
            }
        }
        JsonValue::String(s) => pairs.push((key.to_string(), s)),
        JsonValue::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        JsonValue::Number(n) => pairs.push((key.to_string(), n.to_string())),
        JsonValue::Object(_) => {
            return Err(HhError::InvalidRequest(format!(
                "nested object for query parameter '{}'",
                key
            )))
        }
    }
    Ok(())
}
