//! modeps - module dependency metadata library
//!
//! This library provides:
//! - Dewey-decimal specification versions with a thread-safe parse cache
//! - The manifest dependency declaration grammar (module, package, Java, IDE
//!   and capability-token dependencies) with validation and duplicate detection
//! - A reader for JAR-style module manifests
//! - Text and JSON reporting for the `modeps` binary

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;

pub use domain::{Comparison, Dependency, DependencyKind, SpecificationVersion, VersionCache};
pub use error::{DependencyError, ManifestError, VersionError};
pub use parser::{parse_dependencies, DependencyParser};
