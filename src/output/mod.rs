//! Output formatting for manifest reports
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{DependencyKind, SpecificationVersion};
use crate::manifest::ModuleManifest;
use std::cmp::Ordering;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Minimal output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, quiet: bool, no_color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color: !no_color,
        }
    }
}

/// Outcome of comparing two specification versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub left: SpecificationVersion,
    pub right: SpecificationVersion,
    /// Zero-padded ordering
    pub ordering: Ordering,
    /// Exact digit equality
    pub identical: bool,
}

impl ComparisonReport {
    /// Compare two versions
    pub fn new(left: SpecificationVersion, right: SpecificationVersion) -> Self {
        let ordering = left.compare(&right);
        let identical = left == right;
        Self {
            left,
            right,
            ordering,
            identical,
        }
    }

    /// Returns `<`, `>`, `==` (identical) or `=` (equal after zero padding)
    pub fn symbol(&self) -> &'static str {
        match self.ordering {
            Ordering::Less => "<",
            Ordering::Greater => ">",
            Ordering::Equal if self.identical => "==",
            Ordering::Equal => "=",
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a manifest, restricted to `kinds` (all kinds when empty)
    fn format_manifest(
        &self,
        manifest: &ModuleManifest,
        kinds: &[DependencyKind],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Format and write a version comparison
    fn format_comparison(
        &self,
        report: &ComparisonReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Resolve a kind filter, where an empty filter means every kind
pub(crate) fn selected_kinds(kinds: &[DependencyKind]) -> &[DependencyKind] {
    if kinds.is_empty() {
        DependencyKind::all()
    } else {
        kinds
    }
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> SpecificationVersion {
        SpecificationVersion::parse(text).unwrap()
    }

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert!(config.color);
    }

    #[test]
    fn test_output_config_from_cli() {
        let config = OutputConfig::from_cli(true, false, false, false);
        assert_eq!(config.format, OutputFormat::Json);

        let config = OutputConfig::from_cli(false, true, false, true);
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert!(!config.color);

        let config = OutputConfig::from_cli(false, true, true, false);
        assert_eq!(config.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_comparison_symbols() {
        assert_eq!(ComparisonReport::new(v("1.4"), v("1.10")).symbol(), "<");
        assert_eq!(ComparisonReport::new(v("2"), v("1.9")).symbol(), ">");
        assert_eq!(ComparisonReport::new(v("1.4"), v("1.4")).symbol(), "==");
        assert_eq!(ComparisonReport::new(v("1.4"), v("1.4.0")).symbol(), "=");
    }

    #[test]
    fn test_selected_kinds() {
        assert_eq!(selected_kinds(&[]).len(), 5);
        assert_eq!(
            selected_kinds(&[DependencyKind::Java]),
            &[DependencyKind::Java]
        );
    }
}
