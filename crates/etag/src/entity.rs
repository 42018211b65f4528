//! Entities that can be tagged, and their classification.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::TagOptions;

/// Filesystem metadata used as a cheap proxy for content identity.
///
/// Only `size` and `mtime` feed the tag. `ino` and `ctime` are carried so a
/// descriptor has the same shape as a real stat result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Last modification time
    pub mtime: DateTime<Utc>,
    /// Last status change time
    pub ctime: DateTime<Utc>,
    /// Inode number
    pub ino: u64,
    /// Size in bytes
    pub size: u64,
}

impl FileStat {
    /// Creates a descriptor from size and modification time.
    ///
    /// `ctime` is set to `mtime` and `ino` to zero.
    pub fn new(size: u64, mtime: DateTime<Utc>) -> Self {
        Self {
            mtime,
            ctime: mtime,
            ino: 0,
            size,
        }
    }

    /// Modification time in whole milliseconds since the Unix epoch.
    #[inline]
    pub fn mtime_millis(&self) -> i64 {
        self.mtime.timestamp_millis()
    }
}

#[cfg(unix)]
impl From<&std::fs::Metadata> for FileStat {
    fn from(meta: &std::fs::Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        let to_utc = |secs: i64, nsec: i64| {
            DateTime::from_timestamp(secs, u32::try_from(nsec).unwrap_or(0)).unwrap_or_default()
        };

        Self {
            mtime: to_utc(meta.mtime(), meta.mtime_nsec()),
            ctime: to_utc(meta.ctime(), meta.ctime_nsec()),
            ino: meta.ino(),
            size: meta.size(),
        }
    }
}

/// The thing being tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity<'a> {
    /// Text content, measured and hashed as UTF-8
    Text(&'a str),
    /// Binary content
    Bytes(Cow<'a, [u8]>),
    /// Metadata descriptor
    Stat(FileStat),
}

impl Entity<'_> {
    /// Returns true if this entity is a metadata descriptor.
    #[inline]
    pub fn is_stat(&self) -> bool {
        matches!(self, Entity::Stat(_))
    }

    /// Content bytes, or `None` for a descriptor.
    pub fn content(&self) -> Option<&[u8]> {
        match self {
            Entity::Text(text) => Some(text.as_bytes()),
            Entity::Bytes(bytes) => Some(bytes),
            Entity::Stat(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Entity<'a> {
    fn from(text: &'a str) -> Self {
        Entity::Text(text)
    }
}

impl<'a> From<&'a String> for Entity<'a> {
    fn from(text: &'a String) -> Self {
        Entity::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Entity<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Entity::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Entity<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Entity::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl<'a> From<&'a Vec<u8>> for Entity<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Entity::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for Entity<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Entity::Bytes(Cow::Owned(bytes))
    }
}

impl From<FileStat> for Entity<'_> {
    fn from(stat: FileStat) -> Self {
        Entity::Stat(stat)
    }
}

/// Outcome of classifying an entity against the caller's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Entity is a metadata descriptor
    pub is_stat: bool,
    /// Resulting tag is weak
    pub weak: bool,
}

/// Decides the tag shape for an entity.
///
/// An explicit `weak` option always wins. Otherwise descriptors produce weak
/// tags and content produces strong ones.
pub fn classify(entity: &Entity<'_>, options: Option<&TagOptions>) -> Classification {
    let is_stat = entity.is_stat();
    let weak = options.and_then(|opts| opts.weak).unwrap_or(is_stat);
    Classification { is_stat, weak }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat() -> FileStat {
        FileStat::new(13, DateTime::from_timestamp_millis(1_000).unwrap())
    }

    #[test]
    fn test_content_defaults_strong() {
        let c = classify(&Entity::from("hello"), None);
        assert_eq!(c, Classification { is_stat: false, weak: false });

        let c = classify(&Entity::from(b"hello"), Some(&TagOptions::default()));
        assert!(!c.weak);
    }

    #[test]
    fn test_stat_defaults_weak() {
        let c = classify(&Entity::from(stat()), None);
        assert_eq!(c, Classification { is_stat: true, weak: true });
    }

    #[test]
    fn test_explicit_weak_overrides() {
        let strong = TagOptions::strong();
        let weak = TagOptions::weak();

        assert!(!classify(&Entity::from(stat()), Some(&strong)).weak);
        assert!(classify(&Entity::from("hello"), Some(&weak)).weak);
    }

    #[test]
    fn test_content_bytes() {
        assert_eq!(Entity::from("é").content().map(<[u8]>::len), Some(2));
        assert_eq!(Entity::from(vec![1u8, 2, 3]).content(), Some(&[1u8, 2, 3][..]));
        assert!(Entity::from(stat()).content().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_metadata() {
        let meta = std::fs::metadata(env!("CARGO_MANIFEST_DIR")).unwrap();
        let stat = FileStat::from(&meta);
        assert_eq!(stat.size, meta.len());
        let modified: DateTime<Utc> = meta.modified().unwrap().into();
        assert_eq!(stat.mtime_millis(), modified.timestamp_millis());
    }
}
