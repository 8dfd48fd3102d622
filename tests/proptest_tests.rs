//! Property-based tests for specification versions and dependency parsing

use modeps::domain::code_name::is_identifier;
use modeps::domain::{Comparison, DependencyKind, SpecificationVersion};
use modeps::parser::parse_dependencies;
use proptest::prelude::*;
use std::cmp::Ordering;

fn digits() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..100_000, 1..6)
}

fn join(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

proptest! {
    #[test]
    fn test_round_trip(d in digits()) {
        let text = join(&d);
        let version = SpecificationVersion::parse(&text).unwrap();
        prop_assert_eq!(version.to_string(), text);
        prop_assert_eq!(version.digits(), d.as_slice());
    }

    #[test]
    fn test_compare_antisymmetric(a in digits(), b in digits()) {
        let a = SpecificationVersion::from_digits(a).unwrap();
        let b = SpecificationVersion::from_digits(b).unwrap();
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn test_trailing_zeros(d in digits(), zeros in 1usize..4) {
        let short = SpecificationVersion::from_digits(d.clone()).unwrap();
        let mut padded = d;
        padded.extend(std::iter::repeat(0).take(zeros));
        let padded = SpecificationVersion::from_digits(padded).unwrap();
        prop_assert_eq!(short.compare(&padded), Ordering::Equal);
        prop_assert_ne!(short, padded);
    }

    #[test]
    fn test_empty_component_rejected(d in digits(), at in 0usize..6) {
        let mut parts: Vec<String> = d.iter().map(|x| x.to_string()).collect();
        let at = at.min(parts.len());
        parts.insert(at, String::new());
        prop_assert!(SpecificationVersion::parse(&parts.join(".")).is_err());
    }

    #[test]
    fn test_module_spec_dependency(
        name in "[a-z][a-z0-9]{0,8}(\\.[a-z][a-z0-9]{0,8}){0,3}",
        d in digits()
    ) {
        prop_assume!(name.split('.').all(is_identifier));
        let body = format!("{} > {}", name, join(&d));
        let deps = parse_dependencies(DependencyKind::Module, &body).unwrap();
        prop_assert_eq!(deps.len(), 1);
        let dep = deps.iter().next().unwrap();
        prop_assert_eq!(dep.name(), name.as_str());
        prop_assert_eq!(dep.comparison(), Comparison::Spec);
        prop_assert_eq!(dep.to_string(), format!("module {}", body));
    }
}
