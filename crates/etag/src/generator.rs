//! Tag body generation.
//!
//! Content bodies are `<hex length>-<base64 SHA-1 prefix>`; descriptor bodies
//! are `<hex size>-<hex mtime ms>`. Neither contains a double quote.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha1::{Digest, Sha1};

use crate::FileStat;

/// Number of base64 characters kept from the digest (the first 20 bytes,
/// without padding).
pub const DIGEST_PREFIX_LEN: usize = 27;

/// Body produced for zero-length content.
pub const EMPTY_BODY: &str = "0-2jmj7l5rSw0yVb/vlWAYkK/YBwk";

/// Hash primitive used for content tags.
pub trait Digester {
    /// Returns the raw digest of `data`.
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// SHA-1 digester, the default for content tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Digester;

impl Digester for Sha1Digester {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        Sha1::digest(data).to_vec()
    }
}

/// Generate the body for content.
///
/// Empty content short-circuits to [`EMPTY_BODY`] without calling `digester`.
pub fn content_body(content: &[u8], digester: &dyn Digester) -> String {
    if content.is_empty() {
        tracing::trace!("empty content, using constant body");
        return EMPTY_BODY.to_string();
    }

    let mut hash = STANDARD.encode(digester.digest(content));
    hash.truncate(DIGEST_PREFIX_LEN);
    format!("{:x}-{}", content.len(), hash)
}

/// Generate the body for a metadata descriptor. No hashing occurs.
pub fn stat_body(stat: &FileStat) -> String {
    format!("{:x}-{}", stat.size, signed_hex(stat.mtime_millis()))
}

/// Lowercase hex with a leading `-` for negative values.
fn signed_hex(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{:x}", value)
    }
}
