//! Code name validation
//!
//! A code name is a dotted, Java-package-style identifier such as
//! `org.example.editor`. Module code names may carry a release suffix:
//! `org.example.editor/2` or a range `org.example.editor/2-4`.

use super::specification_version::dot_tokens;
use crate::error::DependencyError;
use std::ops::RangeInclusive;

const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Returns true if `text` is a valid Java identifier that is not a reserved word
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED_WORDS.contains(&text)
}

/// Validates a code name, optionally accepting a `/release[-releaseMax]` suffix
pub fn check_code_name(name: &str, release_allowed: bool) -> Result<(), DependencyError> {
    let base = match name.split_once('/') {
        None => name,
        Some(_) if !release_allowed => {
            return Err(DependencyError::SlashNotPermitted {
                name: name.to_string(),
            })
        }
        Some((base, release)) => {
            check_release(name, release)?;
            base
        }
    };

    let tokens = dot_tokens(base);
    if tokens.len() % 2 == 0 {
        return Err(DependencyError::MalformedCodeName {
            name: base.to_string(),
        });
    }
    for (i, token) in tokens.iter().enumerate() {
        if i % 2 == 0 {
            if !is_identifier(token) {
                return Err(DependencyError::bad_identifier(base, *token));
            }
        } else if *token != "." {
            return Err(DependencyError::MalformedCodeName {
                name: base.to_string(),
            });
        }
    }
    Ok(())
}

/// Parses one release number; a sign prefix is not part of the syntax
pub(crate) fn parse_release(text: &str) -> Option<i32> {
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

/// Returns the releases named by a `/N` or `/N-M` suffix of a validated code name
///
/// A single release `N` yields `N..=N`. Names without a suffix yield `None`.
pub fn release_range(name: &str) -> Option<RangeInclusive<i32>> {
    let (_, release) = name.split_once('/')?;
    match release.split_once('-') {
        None => parse_release(release).map(|n| n..=n),
        Some((low, high)) => Some(parse_release(low)?..=parse_release(high)?),
    }
}

fn check_release(name: &str, release: &str) -> Result<(), DependencyError> {
    let parse = |text: &str| -> Result<i32, DependencyError> {
        parse_release(text).ok_or_else(|| DependencyError::InvalidRelease {
            name: name.to_string(),
            release: text.to_string(),
        })
    };

    match release.split_once('-') {
        None => {
            if parse(release)? < 0 {
                return Err(DependencyError::NegativeRelease {
                    name: name.to_string(),
                });
            }
        }
        Some((low, high)) => {
            let low = parse(low)?;
            let high = parse(high)?;
            if low < 0 {
                return Err(DependencyError::NegativeRelease {
                    name: name.to_string(),
                });
            }
            if high <= low {
                return Err(DependencyError::DescendingReleaseRange {
                    name: name.to_string(),
                });
            }
        }
    }
    Ok(())
}
