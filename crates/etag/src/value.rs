//! Classification of untyped (JSON) entities.
//!
//! Callers on a dynamic boundary hand over a `serde_json::Value`. A value is a
//! stat descriptor when it exposes `ctime` and `mtime` as RFC 3339 date-times
//! and `ino` and `size` as non-negative integers. Binary content uses the
//! `{"type": "Buffer", "data": [...]}` shape a serialized buffer has.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{Entity, EtagError, FileStat, Result};

impl<'a> Entity<'a> {
    /// Classify an untyped value.
    ///
    /// # Errors
    /// [`EtagError::EntityRequired`] for a missing or `null` value, and
    /// [`EtagError::UnsupportedEntity`] for anything that is not a string, a
    /// buffer, or stat-shaped.
    pub fn from_value(value: Option<&'a Value>) -> Result<Self> {
        let value = match value {
            None | Some(Value::Null) => return Err(EtagError::EntityRequired),
            Some(value) => value,
        };

        match value {
            Value::String(text) => Ok(Entity::Text(text.as_str())),
            Value::Object(fields) => {
                if let Some(bytes) = buffer_data(fields) {
                    return Ok(Entity::Bytes(Cow::Owned(bytes)));
                }
                stat_fields(fields)
                    .map(Entity::Stat)
                    .ok_or_else(|| unsupported("object"))
            }
            Value::Bool(_) => Err(unsupported("boolean")),
            Value::Number(_) => Err(unsupported("number")),
            Value::Array(_) => Err(unsupported("array")),
            Value::Null => Err(EtagError::EntityRequired),
        }
    }
}

fn unsupported(kind: &str) -> EtagError {
    tracing::warn!(kind, "rejecting entity of unsupported shape");
    EtagError::UnsupportedEntity(kind.to_string())
}

fn buffer_data(fields: &Map<String, Value>) -> Option<Vec<u8>> {
    if fields.get("type").and_then(Value::as_str) != Some("Buffer") {
        return None;
    }
    fields
        .get("data")?
        .as_array()?
        .iter()
        .map(|byte| byte.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect()
}

fn stat_fields(fields: &Map<String, Value>) -> Option<FileStat> {
    Some(FileStat {
        ctime: date_field(fields, "ctime")?,
        mtime: date_field(fields, "mtime")?,
        ino: fields.get("ino")?.as_u64()?,
        size: fields.get("size")?.as_u64()?,
    })
}

fn date_field(fields: &Map<String, Value>, name: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(name)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
