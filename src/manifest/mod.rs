//! Module manifest reading
//!
//! This module provides functionality to:
//! - Read the main section of a JAR-style manifest
//! - Extract the module identity (code name, specification and implementation versions)
//! - Parse every dependency attribute into validated dependency sets

mod attributes;

pub use attributes::{parse_attributes, Attributes};

use crate::domain::code_name::{check_code_name, release_range};
use crate::domain::{Dependency, DependencyKind, SpecificationVersion, VersionCache};
use crate::error::ManifestError;
use crate::parser::DependencyParser;
use std::collections::BTreeSet;
use std::path::Path;

/// Attribute naming the module code name
pub const CODE_NAME_ATTRIBUTE: &str = "OpenIDE-Module";
/// Attribute holding the module specification version
pub const SPECIFICATION_VERSION_ATTRIBUTE: &str = "OpenIDE-Module-Specification-Version";
/// Attribute holding the module implementation version
pub const IMPLEMENTATION_VERSION_ATTRIBUTE: &str = "OpenIDE-Module-Implementation-Version";
/// Attribute listing capability tokens the module provides
pub const PROVIDES_ATTRIBUTE: &str = "OpenIDE-Module-Provides";

/// Module identity and dependencies declared by a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleManifest {
    /// Code name, possibly with a release suffix
    pub code_name: String,
    pub specification_version: Option<SpecificationVersion>,
    pub implementation_version: Option<String>,
    /// Capability tokens provided
    pub provides: Vec<String>,
    /// Dependencies of every kind
    pub dependencies: BTreeSet<Dependency>,
}

impl ModuleManifest {
    /// Parse manifest content with a private version cache
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        Self::parse_with_cache(content, &VersionCache::new())
    }

    /// Parse manifest content, validating versions through `cache`
    pub fn parse_with_cache(content: &str, cache: &VersionCache) -> Result<Self, ManifestError> {
        let attributes = parse_attributes(content)?;
        Self::from_attributes(&attributes, cache)
    }

    /// Read and parse a manifest file
    pub fn from_path(path: &Path, cache: &VersionCache) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::not_found(path));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
        tracing::debug!("read manifest {} ({} bytes)", path.display(), content.len());
        Self::parse_with_cache(&content, cache)
    }

    /// Build a manifest from already-read attributes
    pub fn from_attributes(
        attributes: &Attributes,
        cache: &VersionCache,
    ) -> Result<Self, ManifestError> {
        let code_name = attributes
            .get(CODE_NAME_ATTRIBUTE)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ManifestError::MissingAttribute {
                attribute: CODE_NAME_ATTRIBUTE,
            })?;
        check_code_name(code_name, true)
            .map_err(|e| ManifestError::invalid_attribute(CODE_NAME_ATTRIBUTE, e))?;

        let specification_version = attributes
            .get(SPECIFICATION_VERSION_ATTRIBUTE)
            .map(|text| {
                cache
                    .get_or_parse(text.trim())
                    .map_err(|e| ManifestError::invalid_version(SPECIFICATION_VERSION_ATTRIBUTE, e))
            })
            .transpose()?;

        let implementation_version = attributes
            .get(IMPLEMENTATION_VERSION_ATTRIBUTE)
            .map(|text| text.trim().to_string());

        let provides = parse_provides(attributes.get(PROVIDES_ATTRIBUTE).unwrap_or(""))?;

        let parser = DependencyParser::with_cache(cache);
        let mut dependencies = BTreeSet::new();
        for kind in DependencyKind::all() {
            let Some(body) = attributes.get(kind.attribute_name()) else {
                continue;
            };
            let parsed = parser
                .parse(*kind, body)
                .map_err(|e| ManifestError::invalid_attribute(kind.attribute_name(), e))?;
            tracing::debug!(
                "{}: {} {} dependencies",
                code_name,
                parsed.len(),
                kind.label()
            );
            dependencies.extend(parsed);
        }

        Ok(Self {
            code_name: code_name.to_string(),
            specification_version,
            implementation_version,
            provides,
            dependencies,
        })
    }

    /// Returns the code name without its release suffix
    pub fn code_name_base(&self) -> &str {
        self.code_name
            .split_once('/')
            .map(|(base, _)| base)
            .unwrap_or(&self.code_name)
    }

    /// Iterates the dependencies of one kind
    pub fn dependencies_of(&self, kind: DependencyKind) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(move |d| d.kind() == kind)
    }

    /// Returns the release from the code name suffix, if any
    pub fn release(&self) -> Option<i32> {
        release_range(&self.code_name).map(|range| *range.start())
    }

    /// Returns true if this module satisfies `dependency` as a module dependency
    ///
    /// The base code names must match and the release must fall inside the
    /// dependency's `/N` or `/N-M` suffix. A dependency without a suffix only
    /// accepts a module without a release. Version constraints are checked
    /// against this module's specification and implementation versions.
    pub fn satisfies(&self, dependency: &Dependency) -> bool {
        let release_matches = match (dependency.release_range(), self.release()) {
            (None, None) => true,
            (Some(accepted), Some(release)) => accepted.contains(&release),
            _ => false,
        };
        dependency.kind() == DependencyKind::Module
            && dependency.base_name() == self.code_name_base()
            && release_matches
            && dependency.is_satisfied_by(
                self.specification_version.as_ref(),
                self.implementation_version.as_deref(),
            )
    }
}

fn parse_provides(value: &str) -> Result<Vec<String>, ManifestError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            check_code_name(token, false)
                .map(|()| token.to_string())
                .map_err(|e| ManifestError::invalid_attribute(PROVIDES_ATTRIBUTE, e))
        })
        .collect()
}
