//! Core domain models for modeps
//!
//! This module contains the fundamental types used throughout the crate:
//! - Specification versions and their parse cache
//! - Dependency kinds, comparisons and validated dependencies
//! - Code name validation shared by dependencies and manifests

pub mod code_name;
mod dependency;
mod specification_version;
mod version_cache;

pub use dependency::{Comparison, Dependency, DependencyKind, IDE_NAME, JAVA_NAME, VM_NAME};
pub use specification_version::SpecificationVersion;
pub use version_cache::VersionCache;
