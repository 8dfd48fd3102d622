//! Main-section attribute reader for JAR-style manifests
//!
//! Handles:
//! - `Name: value` header lines
//! - Continuation lines starting with a single space
//! - CRLF line endings
//! - End of the main section at the first blank line

use crate::error::ManifestError;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9_-]*):[ \t]*(.*)$").unwrap());

/// Ordered main-section attributes of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Looks up an attribute value; names compare case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates attributes in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: String, value: String) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            tracing::warn!("duplicate manifest attribute {}, keeping the last value", name);
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }
}

/// Parse the main section of a manifest
pub fn parse_attributes(content: &str) -> Result<Attributes, ManifestError> {
    let mut attributes = Attributes::default();
    let mut current: Option<(String, String)> = None;

    for (idx, raw_line) in content.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if line.is_empty() {
            break;
        }

        if let Some(rest) = line.strip_prefix(' ') {
            match current.as_mut() {
                Some((_, value)) => value.push_str(rest),
                None => {
                    return Err(ManifestError::MalformedLine {
                        line_number: idx + 1,
                        line: line.to_string(),
                    })
                }
            }
            continue;
        }

        let caps = HEADER_RE
            .captures(line)
            .ok_or_else(|| ManifestError::MalformedLine {
                line_number: idx + 1,
                line: line.to_string(),
            })?;

        if let Some((name, value)) = current.take() {
            attributes.insert(name, value);
        }
        current = Some((caps[1].to_string(), caps[2].to_string()));
    }

    if let Some((name, value)) = current {
        attributes.insert(name, value);
    }

    tracing::trace!("read {} manifest attributes", attributes.len());
    Ok(attributes)
}
