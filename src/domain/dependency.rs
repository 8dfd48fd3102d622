//! Dependency declaration structures

use super::code_name::release_range;
use super::SpecificationVersion;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Reserved name of a dependency on the Java platform specification
pub const JAVA_NAME: &str = "Java";
/// Reserved name of a dependency on the virtual machine
pub const VM_NAME: &str = "VM";
/// Reserved name of a dependency on the hosting IDE
pub const IDE_NAME: &str = "IDE";

/// What a dependency points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Another module, by code name with optional release suffix
    Module,
    /// A package, optionally identified through a sample class
    Package,
    /// The Java platform or VM
    Java,
    /// The hosting IDE, optionally with a major release
    Ide,
    /// An abstract capability token provided by some module
    Requires,
}

impl DependencyKind {
    /// Returns the manifest attribute carrying declarations of this kind
    pub fn attribute_name(&self) -> &'static str {
        match self {
            DependencyKind::Module => "OpenIDE-Module-Module-Dependencies",
            DependencyKind::Package => "OpenIDE-Module-Package-Dependencies",
            DependencyKind::Java => "OpenIDE-Module-Java-Dependencies",
            DependencyKind::Ide => "OpenIDE-Module-IDE-Dependencies",
            DependencyKind::Requires => "OpenIDE-Module-Requires",
        }
    }

    /// Returns the short label used in diagnostics and CLI filters
    pub fn label(&self) -> &'static str {
        match self {
            DependencyKind::Module => "module",
            DependencyKind::Package => "package",
            DependencyKind::Java => "java",
            DependencyKind::Ide => "ide",
            DependencyKind::Requires => "requires",
        }
    }

    /// Returns all dependency kinds
    pub fn all() -> &'static [DependencyKind] {
        &[
            DependencyKind::Module,
            DependencyKind::Package,
            DependencyKind::Java,
            DependencyKind::Ide,
            DependencyKind::Requires,
        ]
    }
}

impl FromStr for DependencyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DependencyKind::all()
            .iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!(
                    "invalid dependency kind '{}': expected 'module', 'package', 'java', 'ide', or 'requires'",
                    s
                )
            })
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the declared version is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `>`: specification version at least the given one
    Spec,
    /// `=`: implementation version exactly the given one
    Impl,
    /// No version constraint
    Any,
}

impl Comparison {
    /// Returns the operator as written in a declaration, if any
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Comparison::Spec => Some(">"),
            Comparison::Impl => Some("="),
            Comparison::Any => None,
        }
    }
}

/// A single validated dependency
///
/// Values are produced only by [`crate::parser::DependencyParser`] and are
/// immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Dependency {
    kind: DependencyKind,
    name: String,
    comparison: Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl Dependency {
    pub(crate) fn new(
        kind: DependencyKind,
        name: impl Into<String>,
        comparison: Comparison,
        version: Option<String>,
    ) -> Self {
        debug_assert_eq!(comparison == Comparison::Any, version.is_none());
        Self {
            kind,
            name: name.into(),
            comparison,
            version,
        }
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Returns the name as declared, including any release or sample class part
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Returns the required version; `None` exactly when the comparison is `Any`
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the name without a `/release` suffix for module and IDE dependencies
    pub fn base_name(&self) -> &str {
        match self.kind {
            DependencyKind::Module | DependencyKind::Ide => self
                .name
                .rsplit_once('/')
                .map(|(base, _)| base)
                .unwrap_or(&self.name),
            _ => &self.name,
        }
    }

    /// Returns the releases a module dependency accepts, from its `/N` or `/N-M` suffix
    pub fn release_range(&self) -> Option<RangeInclusive<i32>> {
        match self.kind {
            DependencyKind::Module => release_range(&self.name),
            _ => None,
        }
    }

    /// Checks this dependency against what a provider offers
    ///
    /// A spec comparison needs a specification version at least the required
    /// one; an implementation comparison needs an identical implementation
    /// version string.
    pub fn is_satisfied_by(
        &self,
        specification: Option<&SpecificationVersion>,
        implementation: Option<&str>,
    ) -> bool {
        match (self.comparison, self.version.as_deref()) {
            (Comparison::Any, _) => true,
            (Comparison::Spec, Some(required)) => {
                match (specification, SpecificationVersion::parse(required)) {
                    (Some(actual), Ok(required)) => actual.is_at_least(&required),
                    _ => false,
                }
            }
            (Comparison::Impl, Some(required)) => implementation == Some(required),
            (_, None) => false,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)?;
        if let (Some(op), Some(version)) = (self.comparison.operator(), &self.version) {
            write!(f, " {} {}", op, version)?;
        }
        Ok(())
    }
}
