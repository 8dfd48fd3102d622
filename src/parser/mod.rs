//! Dependency declaration parser
//!
//! Parses manifest attribute bodies such as
//! `org.foo.bar > 1.2, org.baz/2 = build-17` into validated dependency sets.
//!
//! Grammar, per comma-separated clause:
//! - `name` (no version constraint)
//! - `name > spec-version` (specification version at least)
//! - `name = impl-version` (implementation version exactly)
//!
//! Name rules depend on the dependency kind. A single bad clause fails the
//! whole body.

mod key;

use crate::domain::code_name::{check_code_name, parse_release};
use crate::domain::{
    Comparison, Dependency, DependencyKind, SpecificationVersion, VersionCache, IDE_NAME,
    JAVA_NAME, VM_NAME,
};
use crate::error::{DependencyError, VersionError};
use key::DependencyKey;
use std::collections::{BTreeSet, HashMap};

/// Source of parsed specification versions used to validate `>` comparisons
pub trait VersionSource {
    /// Parse (or look up) a specification version
    fn specification_version(&self, text: &str) -> Result<SpecificationVersion, VersionError>;
}

/// Parses every version afresh
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncached;

impl VersionSource for Uncached {
    fn specification_version(&self, text: &str) -> Result<SpecificationVersion, VersionError> {
        SpecificationVersion::parse(text)
    }
}

impl VersionSource for VersionCache {
    fn specification_version(&self, text: &str) -> Result<SpecificationVersion, VersionError> {
        self.get_or_parse(text)
    }
}

/// Parses dependency declaration bodies
pub struct DependencyParser<'a> {
    versions: &'a dyn VersionSource,
}

impl Default for DependencyParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyParser<'static> {
    /// Creates a parser that does not cache specification versions
    pub fn new() -> Self {
        Self {
            versions: &Uncached,
        }
    }
}

impl<'a> DependencyParser<'a> {
    /// Creates a parser validating specification versions through `versions`
    pub fn with_versions(versions: &'a dyn VersionSource) -> Self {
        Self { versions }
    }

    /// Creates a parser validating specification versions through a shared cache
    pub fn with_cache(cache: &'a VersionCache) -> Self {
        Self::with_versions(cache)
    }

    /// Parse a whole declaration body into a deduplicated dependency set
    pub fn parse(
        &self,
        kind: DependencyKind,
        body: &str,
    ) -> Result<BTreeSet<Dependency>, DependencyError> {
        let mut deps = BTreeSet::new();
        if body.is_empty() {
            return Ok(deps);
        }

        let clauses: Vec<&str> = body.split(',').filter(|c| !c.is_empty()).collect();
        if clauses.is_empty() {
            return Err(DependencyError::NoDependencies {
                body: body.to_string(),
            });
        }

        let mut by_key: HashMap<DependencyKey, Dependency> = HashMap::new();
        for clause in clauses {
            let dep = self.parse_clause(kind, clause)?;
            let key = DependencyKey::of(&dep);
            if let Some(previous) = by_key.get(&key) {
                return Err(DependencyError::Duplicate {
                    dependency: dep.to_string(),
                    previous: previous.to_string(),
                });
            }
            deps.insert(dep.clone());
            by_key.insert(key, dep);
        }
        Ok(deps)
    }

    fn parse_clause(&self, kind: DependencyKind, clause: &str) -> Result<Dependency, DependencyError> {
        let mut tokens = clause
            .split([' ', '\t', '\n', '\r', '\x0c'])
            .filter(|t| !t.is_empty());

        let name = tokens.next().ok_or_else(|| DependencyError::MissingName {
            clause: clause.to_string(),
        })?;

        let (comparison, version) = match tokens.next() {
            None => (Comparison::Any, None),
            Some(token) => {
                let comparison = match token {
                    ">" => Comparison::Spec,
                    "=" => Comparison::Impl,
                    other => {
                        return Err(DependencyError::UnknownComparison {
                            token: other.to_string(),
                        })
                    }
                };
                let version = tokens.next().ok_or_else(|| DependencyError::MissingVersion {
                    clause: clause.to_string(),
                })?;
                if tokens.next().is_some() {
                    return Err(DependencyError::TrailingGarbage {
                        clause: clause.to_string(),
                    });
                }
                if comparison == Comparison::Spec {
                    self.versions
                        .specification_version(version)
                        .map_err(|source| DependencyError::InvalidVersion {
                            clause: clause.to_string(),
                            source,
                        })?;
                }
                (comparison, Some(version.to_string()))
            }
        };

        match kind {
            DependencyKind::Module => check_module(name, comparison, clause)?,
            DependencyKind::Package => check_package(name, comparison, clause)?,
            DependencyKind::Java => check_java(name, comparison, clause)?,
            DependencyKind::Ide => check_ide(name, comparison, clause)?,
            DependencyKind::Requires => check_requires(name, comparison, clause)?,
        }

        Ok(Dependency::new(kind, name, comparison, version))
    }
}

/// Parse a declaration body without caching specification versions
pub fn parse_dependencies(
    kind: DependencyKind,
    body: &str,
) -> Result<BTreeSet<Dependency>, DependencyError> {
    DependencyParser::new().parse(kind, body)
}

fn check_module(name: &str, comparison: Comparison, clause: &str) -> Result<(), DependencyError> {
    check_code_name(name, true)?;
    if name.contains('-') && comparison == Comparison::Impl {
        return Err(DependencyError::ImplementationOnRange {
            clause: clause.to_string(),
        });
    }
    Ok(())
}

fn check_package(name: &str, comparison: Comparison, clause: &str) -> Result<(), DependencyError> {
    let Some(idx) = name.find('[') else {
        return check_code_name(name, false);
    };

    if idx > 0 {
        check_code_name(&name[..idx], false)?;
    }
    if !name.ends_with(']') {
        return Err(DependencyError::UnclosedBracket {
            name: name.to_string(),
        });
    }
    let sample_class = &name[idx + 1..name.len() - 1];
    check_code_name(sample_class, false)?;

    if idx == 0 && comparison != Comparison::Any {
        return Err(DependencyError::SampleClassComparison {
            clause: clause.to_string(),
        });
    }
    if idx > 0 && sample_class.contains('.') {
        return Err(DependencyError::DottedSampleClass {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn check_java(name: &str, comparison: Comparison, clause: &str) -> Result<(), DependencyError> {
    if name != JAVA_NAME && name != VM_NAME {
        return Err(DependencyError::InvalidJavaName {
            name: name.to_string(),
        });
    }
    if comparison == Comparison::Any {
        return Err(DependencyError::comparison_required("Java", clause));
    }
    Ok(())
}

fn check_ide(name: &str, comparison: Comparison, clause: &str) -> Result<(), DependencyError> {
    let valid = name == IDE_NAME
        || name
            .split_once('/')
            .filter(|(base, _)| *base == IDE_NAME)
            .and_then(|(_, release)| parse_release(release))
            .is_some_and(|release| release >= 0);
    if !valid {
        return Err(DependencyError::InvalidIdeName {
            name: name.to_string(),
        });
    }
    if comparison == Comparison::Any {
        return Err(DependencyError::comparison_required("IDE", clause));
    }
    Ok(())
}

fn check_requires(name: &str, comparison: Comparison, clause: &str) -> Result<(), DependencyError> {
    if comparison != Comparison::Any {
        return Err(DependencyError::ComparisonOnToken {
            clause: clause.to_string(),
        });
    }
    check_code_name(name, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(kind: DependencyKind, body: &str) -> Result<Vec<Dependency>, DependencyError> {
        parse_dependencies(kind, body).map(|deps| deps.into_iter().collect())
    }

    fn single(kind: DependencyKind, body: &str) -> Dependency {
        let mut deps = parse(kind, body).unwrap();
        assert_eq!(deps.len(), 1, "expected exactly one dependency in {body:?}");
        deps.remove(0)
    }

    #[test]
    fn test_empty_body() {
        assert!(parse(DependencyKind::Module, "").unwrap().is_empty());
    }

    #[test]
    fn test_only_separators() {
        assert!(matches!(
            parse(DependencyKind::Module, ",,"),
            Err(DependencyError::NoDependencies { .. })
        ));
    }

    #[test]
    fn test_blank_clause_has_no_name() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo, "),
            Err(DependencyError::MissingName { .. })
        ));
    }

    #[test]
    fn test_empty_clauses_between_commas_are_skipped() {
        let deps = parse(DependencyKind::Module, "org.foo,,org.bar").unwrap();
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_module_plain() {
        let dep = single(DependencyKind::Module, "org.foo.bar");
        assert_eq!(dep.kind(), DependencyKind::Module);
        assert_eq!(dep.name(), "org.foo.bar");
        assert_eq!(dep.comparison(), Comparison::Any);
        assert_eq!(dep.version(), None);
    }

    #[test]
    fn test_module_with_release_and_spec() {
        let dep = single(DependencyKind::Module, "org.foo/3 > 1.0");
        assert_eq!(dep.name(), "org.foo/3");
        assert_eq!(dep.comparison(), Comparison::Spec);
        assert_eq!(dep.version(), Some("1.0"));
    }

    #[test]
    fn test_module_release_range() {
        let dep = single(DependencyKind::Module, "org.foo/3-5");
        assert_eq!(dep.comparison(), Comparison::Any);
        assert!(parse(DependencyKind::Module, "org.foo/3-5 > 1.0").is_ok());
    }

    #[test]
    fn test_module_impl_on_range_rejected() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo/3-5 = 20031201"),
            Err(DependencyError::ImplementationOnRange { .. })
        ));
    }

    #[test]
    fn test_module_impl() {
        let dep = single(DependencyKind::Module, "org.foo/3 = build-17");
        assert_eq!(dep.comparison(), Comparison::Impl);
        assert_eq!(dep.version(), Some("build-17"));
    }

    #[test]
    fn test_impl_version_is_not_validated() {
        assert!(parse(DependencyKind::Module, "org.foo = 1..x").is_ok());
    }

    #[test]
    fn test_whitespace_variants() {
        let dep = single(DependencyKind::Module, "\torg.foo\r\n>   1.2 ");
        assert_eq!(dep.name(), "org.foo");
        assert_eq!(dep.version(), Some("1.2"));

        let dep = single(DependencyKind::Module, "org.foo\x0c>\x0c1.0");
        assert_eq!(dep.name(), "org.foo");
        assert_eq!(dep.version(), Some("1.0"));
    }

    #[test]
    fn test_strange_comparison() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo >= 1.0"),
            Err(DependencyError::UnknownComparison { .. })
        ));
    }

    #[test]
    fn test_comparison_without_version() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo >"),
            Err(DependencyError::MissingVersion { .. })
        ));
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo > 1.0 extra"),
            Err(DependencyError::TrailingGarbage { .. })
        ));
    }

    #[test]
    fn test_bad_spec_version() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo > 1..0"),
            Err(DependencyError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_bad_code_name() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo-bar"),
            Err(DependencyError::BadIdentifier { .. })
        ));
    }

    #[test]
    fn test_duplicate_modules() {
        assert!(matches!(
            parse(DependencyKind::Module, "org.foo.bar > 1.2, org.foo.bar = 1.0"),
            Err(DependencyError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_duplicate_across_releases() {
        let err = parse(DependencyKind::Module, "org.foo/1, org.foo/2 > 1.0").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("module org.foo/2 > 1.0"));
        assert!(msg.contains("module org.foo/1"));
    }

    #[test]
    fn test_one_bad_clause_fails_all() {
        assert!(parse(DependencyKind::Module, "org.foo, org.bar > x").is_err());
    }

    #[test]
    fn test_package_plain() {
        let dep = single(DependencyKind::Package, "org.foo > 1.0");
        assert_eq!(dep.comparison(), Comparison::Spec);
    }

    #[test]
    fn test_package_no_release() {
        assert!(matches!(
            parse(DependencyKind::Package, "org.foo/1"),
            Err(DependencyError::SlashNotPermitted { .. })
        ));
    }

    #[test]
    fn test_package_with_sample_class() {
        let dep = single(DependencyKind::Package, "org.foo[Bar] > 1.0");
        assert_eq!(dep.name(), "org.foo[Bar]");
    }

    #[test]
    fn test_package_sample_class_only() {
        let dep = single(DependencyKind::Package, "[com.foo.Bar]");
        assert_eq!(dep.comparison(), Comparison::Any);
    }

    #[test]
    fn test_package_sample_class_only_rejects_comparison() {
        assert!(matches!(
            parse(DependencyKind::Package, "[com.foo.Bar] > 1.0"),
            Err(DependencyError::SampleClassComparison { .. })
        ));
    }

    #[test]
    fn test_package_unclosed_bracket() {
        assert!(matches!(
            parse(DependencyKind::Package, "org.foo[Bar"),
            Err(DependencyError::UnclosedBracket { .. })
        ));
    }

    #[test]
    fn test_package_dotted_sample_class_with_prefix() {
        assert!(matches!(
            parse(DependencyKind::Package, "org.foo[bar.Baz]"),
            Err(DependencyError::DottedSampleClass { .. })
        ));
    }

    #[test]
    fn test_package_empty_sample_class() {
        assert!(parse(DependencyKind::Package, "org.foo[]").is_err());
    }

    #[test]
    fn test_package_duplicates() {
        assert!(matches!(
            parse(DependencyKind::Package, "org.foo[Bar], org.foo > 1.0"),
            Err(DependencyError::Duplicate { .. })
        ));
        assert!(parse(DependencyKind::Package, "[org.foo.Bar], org.foo").is_ok());
    }

    #[test]
    fn test_java() {
        assert!(matches!(
            parse(DependencyKind::Java, "Java"),
            Err(DependencyError::ComparisonRequired { .. })
        ));
        let dep = single(DependencyKind::Java, "Java > 1.4");
        assert_eq!(dep.name(), JAVA_NAME);
        assert!(parse(DependencyKind::Java, "Java > 1.4, VM = 1.4.2_01-b06").is_ok());
    }

    #[test]
    fn test_java_bad_name() {
        assert!(matches!(
            parse(DependencyKind::Java, "JDK > 1.4"),
            Err(DependencyError::InvalidJavaName { .. })
        ));
    }

    #[test]
    fn test_java_duplicate() {
        assert!(matches!(
            parse(DependencyKind::Java, "Java > 1.4, Java > 1.5"),
            Err(DependencyError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_ide() {
        assert!(parse(DependencyKind::Ide, "IDE > 1.0").is_ok());
        assert!(parse(DependencyKind::Ide, "IDE/1 > 2.0").is_ok());
        assert!(matches!(
            parse(DependencyKind::Ide, "IDE/1"),
            Err(DependencyError::ComparisonRequired { .. })
        ));
        assert!(matches!(
            parse(DependencyKind::Ide, "IDE/x > 1.0"),
            Err(DependencyError::InvalidIdeName { .. })
        ));
        assert!(matches!(
            parse(DependencyKind::Ide, "IDE/+1 > 1.0"),
            Err(DependencyError::InvalidIdeName { .. })
        ));
        assert!(matches!(
            parse(DependencyKind::Ide, "Editor/1 > 1.0"),
            Err(DependencyError::InvalidIdeName { .. })
        ));
        assert!(matches!(
            parse(DependencyKind::Ide, "IDE/1 > 1.0, IDE > 2.0"),
            Err(DependencyError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_requires() {
        let dep = single(DependencyKind::Requires, "org.openide.modules.os.Unix");
        assert_eq!(dep.comparison(), Comparison::Any);
        assert!(matches!(
            parse(DependencyKind::Requires, "some.token > 1.0"),
            Err(DependencyError::ComparisonOnToken { .. })
        ));
        assert!(matches!(
            parse(DependencyKind::Requires, "some.token/1"),
            Err(DependencyError::SlashNotPermitted { .. })
        ));
    }

    #[test]
    fn test_parser_with_cache() {
        let cache = VersionCache::new();
        let parser = DependencyParser::with_cache(&cache);
        parser
            .parse(DependencyKind::Module, "org.a > 1.0, org.b > 1.0, org.c = 1.0")
            .unwrap();
        assert_eq!(cache.len(), 1);

        assert!(parser.parse(DependencyKind::Module, "org.a > 1.").is_err());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_result_set_contains_all() {
        let deps = parse_dependencies(DependencyKind::Module, "org.b > 1.0, org.a").unwrap();
        let names: Vec<_> = deps.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["org.a", "org.b"]);
    }
}
