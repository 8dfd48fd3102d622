//! JSON output formatter for machine processing

use crate::domain::{Dependency, DependencyKind};
use crate::manifest::ModuleManifest;
use crate::output::{selected_kinds, ComparisonReport, OutputFormatter, Verbosity};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a manifest
#[derive(Serialize)]
struct JsonManifest<'a> {
    code_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    specification_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    implementation_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    provides: Vec<&'a str>,
    dependencies: Vec<&'a Dependency>,
    /// Names without their `/release` suffix (verbose only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    base_names: Vec<&'a str>,
}

/// JSON representation of a version comparison
#[derive(Serialize)]
struct JsonComparison {
    left: String,
    right: String,
    ordering: &'static str,
    identical: bool,
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_manifest(
        &self,
        manifest: &ModuleManifest,
        kinds: &[DependencyKind],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let kinds = selected_kinds(kinds);
        let dependencies: Vec<&Dependency> = manifest
            .dependencies
            .iter()
            .filter(|d| kinds.contains(&d.kind()))
            .collect();
        let base_names = if self.verbosity == Verbosity::Verbose {
            dependencies.iter().copied().map(Dependency::base_name).collect()
        } else {
            Vec::new()
        };

        let output = JsonManifest {
            code_name: &manifest.code_name,
            specification_version: manifest
                .specification_version
                .as_ref()
                .map(|v| v.to_string()),
            implementation_version: manifest.implementation_version.as_deref(),
            provides: manifest.provides.iter().map(String::as_str).collect(),
            dependencies,
            base_names,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_comparison(
        &self,
        report: &ComparisonReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonComparison {
            left: report.left.to_string(),
            right: report.right.to_string(),
            ordering: ordering_name(report.ordering),
            identical: report.identical,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
