//! Duplicate detection keys
//!
//! Two dependencies in one declaration collide when they share a kind and a
//! base name, regardless of release suffix or version comparison.

use crate::domain::{Dependency, DependencyKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DependencyKey {
    kind: DependencyKind,
    name: String,
}

impl DependencyKey {
    pub(crate) fn of(dependency: &Dependency) -> Self {
        let name = match dependency.kind() {
            DependencyKind::Module | DependencyKind::Ide => dependency.base_name(),
            DependencyKind::Package => package_key(dependency.name()),
            DependencyKind::Java | DependencyKind::Requires => dependency.name(),
        };
        Self {
            kind: dependency.kind(),
            name: name.to_string(),
        }
    }
}

/// `org.foo[Bar]` keys on `org.foo`; a bare `[org.foo.Bar]` keeps its brackets.
fn package_key(name: &str) -> &str {
    match name.find('[') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
