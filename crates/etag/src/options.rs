//! Caller options for tag generation.

use serde::{Deserialize, Deserializer, Serialize};

/// Options controlling the generated tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOptions {
    /// Force a weak (`Some(true)`) or strong (`Some(false)`) tag.
    ///
    /// `None` lets the entity decide. When deserializing, anything that is
    /// not a JSON boolean is treated as unset.
    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub weak: Option<bool>,
}

impl TagOptions {
    /// Options requesting a weak tag.
    pub const fn weak() -> Self {
        Self { weak: Some(true) }
    }

    /// Options requesting a strong tag.
    pub const fn strong() -> Self {
        Self { weak: Some(false) }
    }

    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read options from an untyped value.
    ///
    /// Anything that is not an object yields the defaults.
    pub fn from_value(value: &serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}
