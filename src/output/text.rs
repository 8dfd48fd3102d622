//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Module identity header (code name, versions, provided tokens)
//! - Dependencies grouped by kind with colored comparison operators
//! - Version comparison lines

use crate::domain::{Dependency, DependencyKind};
use crate::manifest::ModuleManifest;
use crate::output::{selected_kinds, ComparisonReport, OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn format_header(
        &self,
        manifest: &ModuleManifest,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let spec = manifest
            .specification_version
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let implementation = manifest.implementation_version.as_deref().unwrap_or("-");

        if self.color {
            writeln!(
                writer,
                "{} {} {}",
                manifest.code_name.bold(),
                format!("spec {}", spec).dimmed(),
                format!("impl {}", implementation).dimmed()
            )?;
        } else {
            writeln!(
                writer,
                "{} spec {} impl {}",
                manifest.code_name, spec, implementation
            )?;
        }

        if !manifest.provides.is_empty() {
            writeln!(writer, "  provides: {}", manifest.provides.join(", "))?;
        }
        Ok(())
    }

    fn format_dependency_line(
        &self,
        dependency: &Dependency,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let constraint = match (dependency.comparison().operator(), dependency.version()) {
            (Some(op), Some(version)) if self.color => {
                format!(" {} {}", op.cyan(), version.bright_white().bold())
            }
            (Some(op), Some(version)) => format!(" {} {}", op, version),
            _ => String::new(),
        };
        let indent = if self.verbosity == Verbosity::Quiet {
            ""
        } else {
            "    "
        };
        writeln!(writer, "{}{}{}", indent, dependency.name(), constraint)
    }

    fn format_group(
        &self,
        manifest: &ModuleManifest,
        kind: DependencyKind,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let deps: Vec<&Dependency> = manifest.dependencies_of(kind).collect();
        if deps.is_empty() && self.verbosity != Verbosity::Verbose {
            return Ok(());
        }

        if self.verbosity != Verbosity::Quiet {
            let count = format!("({})", deps.len());
            let label = if self.verbosity == Verbosity::Verbose {
                format!("{} [{}]", kind.label(), kind.attribute_name())
            } else {
                kind.label().to_string()
            };
            if self.color {
                writeln!(writer, "  {} {}", label.green(), count.dimmed())?;
            } else {
                writeln!(writer, "  {} {}", label, count)?;
            }
        }

        for dep in deps {
            self.format_dependency_line(dep, writer)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format_manifest(
        &self,
        manifest: &ModuleManifest,
        kinds: &[DependencyKind],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            self.format_header(manifest, writer)?;
        }
        for kind in selected_kinds(kinds) {
            self.format_group(manifest, *kind, writer)?;
        }
        Ok(())
    }

    fn format_comparison(
        &self,
        report: &ComparisonReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "{} {} {}",
                report.left,
                report.symbol().yellow().bold(),
                report.right
            )
        } else {
            writeln!(writer, "{} {} {}", report.left, report.symbol(), report.right)
        }
    }
}
