//! Template filters

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tera::Value;

/// `{{ snippet.created | human_date }}` -> `02 Jan 2006 at 15:04`, in UTC.
///
/// Timestamps reach the template as RFC 3339 strings (chrono's serde
/// format). A null renders as an empty string.
pub fn human_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = match value {
        Value::Null => return Ok(Value::String(String::new())),
        Value::String(s) => s,
        other => {
            return Err(tera::Error::msg(format!(
                "human_date expects a timestamp string, got {}",
                other
            )))
        }
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| tera::Error::msg(format!("human_date: invalid timestamp '{}': {}", raw, e)))?;

    Ok(Value::String(
        parsed.with_timezone(&Utc).format("%d %b %Y at %H:%M").to_string(),
    ))
}
