//! Memoized specification version parsing

use super::specification_version::{parse_digits, SpecificationVersion};
use crate::error::VersionError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Thread-safe cache of parsed specification versions, keyed by input text
///
/// Versions built from the same text share their digit storage. Entries are
/// kept for the lifetime of the cache; failed parses are not cached.
#[derive(Debug, Default)]
pub struct VersionCache {
    entries: Mutex<HashMap<String, Arc<[u32]>>>,
}

impl VersionCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached version for `text`, parsing and storing it on a miss
    pub fn get_or_parse(&self, text: &str) -> Result<SpecificationVersion, VersionError> {
        let mut entries = self.entries.lock();
        if let Some(digits) = entries.get(text) {
            return Ok(SpecificationVersion::from_shared(Arc::clone(digits)));
        }

        let digits = parse_digits(text)?;
        entries.insert(text.to_string(), Arc::clone(&digits));
        Ok(SpecificationVersion::from_shared(digits))
    }

    /// Number of distinct version strings held
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every entry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
