//! WASM bindings for etag generation.
//!
//! These bindings allow the crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments.

use chrono::DateTime;
use wasm_bindgen::prelude::*;

use crate::{generate_tag, FileStat, TagOptions};

fn options(weak: Option<bool>) -> TagOptions {
    TagOptions { weak }
}

/// Generate a tag for text content.
///
/// # Arguments
/// * `text` - Content, hashed as UTF-8
/// * `weak` - Force a weak or strong tag; strong when omitted
#[wasm_bindgen]
pub fn etag(text: &str, weak: Option<bool>) -> String {
    generate_tag(text, Some(&options(weak)))
}

/// Generate a tag for binary content.
#[wasm_bindgen]
pub fn etag_bytes(data: &[u8], weak: Option<bool>) -> String {
    generate_tag(data, Some(&options(weak)))
}

/// Generate a tag from file size and modification time.
///
/// # Arguments
/// * `size` - File size in bytes
/// * `mtime_ms` - Modification time in milliseconds since the Unix epoch
/// * `weak` - Force a weak or strong tag; weak when omitted
#[wasm_bindgen]
pub fn stat_etag(size: u64, mtime_ms: i64, weak: Option<bool>) -> Result<String, JsValue> {
    let mtime = DateTime::from_timestamp_millis(mtime_ms)
        .ok_or_else(|| JsValue::from_str("mtime out of range"))?;
    Ok(generate_tag(FileStat::new(size, mtime), Some(&options(weak))))
}

/// Generate a tag from JSON input.
///
/// # Arguments
/// * `entity_json` - JSON string, `{"type": "Buffer", "data": [...]}`, or a
///   stat object with `ctime`, `mtime`, `ino` and `size`
/// * `options_json` - Optional JSON options, e.g. `{"weak": true}`
#[wasm_bindgen]
pub fn etag_from_json(entity_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let entity: serde_json::Value = serde_json::from_str(entity_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    let options: Option<serde_json::Value> = options_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    crate::generate_tag_from_value(Some(&entity), options.as_ref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns true if the tag carries the weak prefix.
#[wasm_bindgen]
pub fn is_weak(tag: &str) -> bool {
    crate::is_weak(tag)
}
