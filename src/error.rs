//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: malformed specification version strings
//! - DependencyError: malformed dependency declarations
//! - ManifestError: issues reading or interpreting a module manifest

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Specification version format errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Dependency declaration format errors
    #[error(transparent)]
    Dependency(#[from] DependencyError),

    /// Manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Format errors raised while parsing a specification version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The dot/number alternation is broken (empty component, leading or trailing dot)
    #[error("even number of pieces in specification version '{version}'")]
    Malformed { version: String },

    /// A component is below zero
    #[error("specification version component < 0 in '{version}': {component}")]
    Negative { version: String, component: String },

    /// A component is not an integer
    #[error("invalid number '{component}' in specification version '{version}'")]
    InvalidNumber { version: String, component: String },
}

/// Format errors raised while parsing a dependency declaration body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// The body contained nothing but separators
    #[error("no dependencies given: \"{body}\"")]
    NoDependencies { body: String },

    /// A clause had no name token
    #[error("no name in dependency: \"{clause}\"")]
    MissingName { clause: String },

    /// The comparison token was neither `>` nor `=`
    #[error("strange comparison string: \"{token}\"")]
    UnknownComparison { token: String },

    /// A comparison token was not followed by a version
    #[error("comparison string without version: \"{clause}\"")]
    MissingVersion { clause: String },

    /// Tokens remained after the version
    #[error("trailing garbage in dependency: \"{clause}\"")]
    TrailingGarbage { clause: String },

    /// A `>` comparison carried an unparseable specification version
    #[error("invalid specification version in dependency \"{clause}\": {source}")]
    InvalidVersion {
        clause: String,
        #[source]
        source: VersionError,
    },

    /// A release suffix was used where none is permitted
    #[error("no slash permitted in: {name}")]
    SlashNotPermitted { name: String },

    /// A release number was below zero
    #[error("negative release number: {name}")]
    NegativeRelease { name: String },

    /// A release suffix did not parse as integers
    #[error("invalid release number '{release}' in: {name}")]
    InvalidRelease { name: String, release: String },

    /// A release range was empty or descending
    #[error("release number range must be increasing: {name}")]
    DescendingReleaseRange { name: String },

    /// The dot/identifier alternation of a code name is broken
    #[error("even number of pieces in code name: {name}")]
    MalformedCodeName { name: String },

    /// A component of a code name is not a valid identifier
    #[error("bad package component '{component}' in: {name}")]
    BadIdentifier { name: String, component: String },

    /// An implementation comparison against a ranged release
    #[error("cannot have an implementation dependency on a ranged release version: \"{clause}\"")]
    ImplementationOnRange { clause: String },

    /// A bracketed sample class without a closing bracket
    #[error("no close bracket on package dependency: {name}")]
    UnclosedBracket { name: String },

    /// A version comparison on a sample-class-only package dependency
    #[error(
        "cannot use a version comparison on a package dependency when only a sample class is given: \"{clause}\""
    )]
    SampleClassComparison { clause: String },

    /// A dotted sample class together with a package prefix
    #[error("cannot have a sample class with dots when package is specified: {name}")]
    DottedSampleClass { name: String },

    /// A Java dependency on something other than `Java` or `VM`
    #[error("Java dependency must be on \"Java\" or \"VM\": {name}")]
    InvalidJavaName { name: String },

    /// A Java or IDE dependency without a version comparison
    #[error("must give a comparison for a {kind} dependency: \"{clause}\"")]
    ComparisonRequired { kind: String, clause: String },

    /// An IDE dependency on something other than `IDE` or `IDE/<n>`
    #[error("invalid IDE dependency: {name}")]
    InvalidIdeName { name: String },

    /// A version comparison on a capability token
    #[error("cannot give a comparison for a token requires dependency: \"{clause}\"")]
    ComparisonOnToken { clause: String },

    /// Two clauses share the same type and base name
    #[error("dependency {dependency} duplicates the similar dependency {previous}")]
    Duplicate {
        dependency: String,
        previous: String,
    },
}

/// Errors related to module manifest operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line that is neither a header nor a continuation
    #[error("malformed manifest line {line_number}: \"{line}\"")]
    MalformedLine { line_number: usize, line: String },

    /// The module code name attribute is absent
    #[error("missing {attribute} attribute")]
    MissingAttribute { attribute: &'static str },

    /// An attribute value failed dependency/code name validation
    #[error("invalid {attribute} attribute: {source}")]
    InvalidAttribute {
        attribute: String,
        #[source]
        source: DependencyError,
    },

    /// An attribute value is not a valid specification version
    #[error("invalid {attribute} attribute: {source}")]
    InvalidVersion {
        attribute: String,
        #[source]
        source: VersionError,
    },
}

impl VersionError {
    /// Creates a new Malformed error
    pub fn malformed(version: impl Into<String>) -> Self {
        VersionError::Malformed {
            version: version.into(),
        }
    }

    /// Creates a new InvalidNumber error
    pub fn invalid_number(version: impl Into<String>, component: impl Into<String>) -> Self {
        VersionError::InvalidNumber {
            version: version.into(),
            component: component.into(),
        }
    }
}

impl DependencyError {
    /// Creates a new BadIdentifier error
    pub fn bad_identifier(name: impl Into<String>, component: impl Into<String>) -> Self {
        DependencyError::BadIdentifier {
            name: name.into(),
            component: component.into(),
        }
    }

    /// Creates a new ComparisonRequired error
    pub fn comparison_required(kind: impl Into<String>, clause: impl Into<String>) -> Self {
        DependencyError::ComparisonRequired {
            kind: kind.into(),
            clause: clause.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new InvalidAttribute error
    pub fn invalid_attribute(attribute: impl Into<String>, source: DependencyError) -> Self {
        ManifestError::InvalidAttribute {
            attribute: attribute.into(),
            source,
        }
    }

    /// Creates a new InvalidVersion error
    pub fn invalid_version(attribute: impl Into<String>, source: VersionError) -> Self {
        ManifestError::InvalidVersion {
            attribute: attribute.into(),
            source,
        }
    }
}
