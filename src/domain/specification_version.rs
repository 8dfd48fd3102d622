//! Dewey-decimal specification versions
//!
//! A specification version is a non-empty sequence of non-negative integers
//! written as `1.4.2`. Ordering pads the shorter sequence with zeros, so
//! `1.4` and `1.4.0` compare as equal, while equality compares the digit
//! sequences exactly and tells them apart.

use crate::error::VersionError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

const HASH_SEED: u32 = 925_295;

/// A parsed specification version such as `1.4.2`
///
/// Deliberately implements neither `PartialOrd` nor `Ord`: [`compare`] pads
/// with zeros and is therefore not consistent with `Eq`.
///
/// [`compare`]: SpecificationVersion::compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpecificationVersion {
    digits: Arc<[u32]>,
}

impl SpecificationVersion {
    /// Parses a version without going through any cache
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        parse_digits(text).map(Self::from_shared)
    }

    /// Creates a version from its components; `None` when `digits` is empty
    pub fn from_digits(digits: impl Into<Vec<u32>>) -> Option<Self> {
        let digits = digits.into();
        if digits.is_empty() {
            return None;
        }
        Some(Self::from_shared(digits.into()))
    }

    pub(crate) fn from_shared(digits: Arc<[u32]>) -> Self {
        Self { digits }
    }

    /// Returns the version components
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    /// Compares two versions component-wise, padding the shorter one with zeros
    pub fn compare(&self, other: &SpecificationVersion) -> Ordering {
        let len = self.digits.len().max(other.digits.len());
        (0..len)
            .map(|i| {
                let d1 = self.digits.get(i).copied().unwrap_or(0);
                let d2 = other.digits.get(i).copied().unwrap_or(0);
                d1.cmp(&d2)
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Returns true if this version is the same as or newer than `required`
    pub fn is_at_least(&self, required: &SpecificationVersion) -> bool {
        self.compare(required) != Ordering::Less
    }

    fn fold_hash(&self) -> u32 {
        self.digits
            .iter()
            .enumerate()
            .fold(HASH_SEED, |hash, (i, digit)| {
                hash ^ digit.wrapping_shl(i as u32)
            })
    }
}

/// Splits `text` on `.`, keeping every dot as its own token.
///
/// Empty runs between delimiters produce no token, so `1..0` yields
/// `["1", ".", ".", "0"]`.
pub(crate) fn dot_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if ch == '.' {
            if start < idx {
                tokens.push(&text[start..idx]);
            }
            tokens.push(&text[idx..idx + 1]);
            start = idx + 1;
        }
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

pub(crate) fn parse_digits(text: &str) -> Result<Arc<[u32]>, VersionError> {
    let tokens = dot_tokens(text);
    if tokens.len() % 2 == 0 {
        return Err(VersionError::malformed(text));
    }

    let mut digits = Vec::with_capacity(tokens.len() / 2 + 1);
    for (i, token) in tokens.iter().enumerate() {
        if i % 2 == 1 {
            if *token != "." {
                return Err(VersionError::malformed(text));
            }
            continue;
        }
        if token.starts_with('+') {
            return Err(VersionError::invalid_number(text, *token));
        }
        let piece: i32 = token
            .parse()
            .map_err(|_| VersionError::invalid_number(text, *token))?;
        if piece < 0 {
            return Err(VersionError::Negative {
                version: text.to_string(),
                component: token.to_string(),
            });
        }
        digits.push(piece as u32);
    }
    Ok(digits.into())
}

impl PartialEq for SpecificationVersion {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for SpecificationVersion {}

impl Hash for SpecificationVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.fold_hash());
    }
}

impl FromStr for SpecificationVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SpecificationVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SpecificationVersion> for String {
    fn from(version: SpecificationVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for SpecificationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
