//! Tag formatting.

/// Prefix marking a weak validator.
pub const WEAK_PREFIX: &str = "W/";

/// Quote a body for use as an `ETag` header value.
///
/// Bodies never contain `"`, so no escaping is done.
pub fn format_tag(body: &str, weak: bool) -> String {
    let prefix = if weak { WEAK_PREFIX } else { "" };
    format!("{prefix}\"{body}\"")
}

/// Returns true if `tag` carries the weak prefix.
#[inline]
pub fn is_weak(tag: &str) -> bool {
    tag.starts_with(WEAK_PREFIX)
}
