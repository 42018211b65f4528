//! HTTP entity tag (ETag) generation.
//!
//! This crate provides:
//! - Strong tags for text and binary content (length + truncated SHA-1)
//! - Weak tags for file metadata (size + modification time)
//! - Classification of untyped JSON entities
//! - WASM bindings for browser and Deno usage
//!
//! # Example
//!
//! ```
//! use etag_core::{generate_tag, Entity, TagOptions};
//!
//! let tag = generate_tag(Entity::from("hello world"), None);
//! assert_eq!(tag, "\"b-Kq5sNclPz7QV2+lfQIuc6R7oRu0\"");
//!
//! let weak = generate_tag(Entity::from("hello world"), Some(&TagOptions::weak()));
//! assert_eq!(weak, "W/\"b-Kq5sNclPz7QV2+lfQIuc6R7oRu0\"");
//! ```

#![warn(missing_docs)]

mod entity;
mod error;
mod format;
mod generator;
mod options;
mod value;

#[cfg(feature = "wasm")]
mod wasm;

pub use entity::{classify, Classification, Entity, FileStat};
pub use error::{ErrorKind, EtagError, EtagErrorCode, Result};
pub use format::{format_tag, is_weak, WEAK_PREFIX};
pub use generator::{content_body, stat_body, Digester, Sha1Digester, DIGEST_PREFIX_LEN, EMPTY_BODY};
pub use options::TagOptions;

use serde_json::Value;

/// Generate a tag for an entity using SHA-1 for content.
///
/// Content tags are strong and descriptor tags weak unless `options` says
/// otherwise.
pub fn generate_tag<'a>(entity: impl Into<Entity<'a>>, options: Option<&TagOptions>) -> String {
    generate_tag_with(entity, options, &Sha1Digester)
}

/// Generate a tag with a caller-supplied digest primitive.
pub fn generate_tag_with<'a>(
    entity: impl Into<Entity<'a>>,
    options: Option<&TagOptions>,
    digester: &dyn Digester,
) -> String {
    let entity = entity.into();
    let Classification { is_stat, weak } = classify(&entity, options);

    let body = match &entity {
        Entity::Stat(stat) => stat_body(stat),
        Entity::Text(text) => content_body(text.as_bytes(), digester),
        Entity::Bytes(bytes) => content_body(bytes, digester),
    };
    tracing::debug!(is_stat, weak, body_len = body.len(), "generated etag");

    format_tag(&body, weak)
}

/// Generate a tag for untyped input.
///
/// `options` is read leniently: a non-boolean `weak` is ignored, as is an
/// options value that is not an object.
///
/// # Errors
/// Returns an [`EtagError`] when `entity` is missing or has an unsupported
/// shape. No hashing happens in that case.
pub fn generate_tag_from_value(entity: Option<&Value>, options: Option<&Value>) -> Result<String> {
    let entity = Entity::from_value(entity)?;
    let options = options.map(TagOptions::from_value);
    Ok(generate_tag(entity, options.as_ref()))
}

/// Generate a strong tag for content.
pub fn strong_tag(content: &[u8]) -> String {
    generate_tag(content, Some(&TagOptions::strong()))
}

/// Generate a weak tag for content.
pub fn weak_tag(content: &[u8]) -> String {
    generate_tag(content, Some(&TagOptions::weak()))
}
