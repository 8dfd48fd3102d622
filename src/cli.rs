//! CLI argument parsing module for modeps

use crate::domain::DependencyKind;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a dependency kind label: module, package, java, ide or requires
fn parse_kind(s: &str) -> Result<DependencyKind, String> {
    s.parse()
}

/// Module dependency metadata inspector
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modeps",
    version,
    about = "Parse and validate module manifest dependencies"
)]
pub struct CliArgs {
    /// Manifest file to read
    #[arg(default_value = "META-INF/MANIFEST.MF")]
    pub path: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - dependency lines only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Report only these dependency kinds (can be specified multiple times)
    #[arg(long = "kind", action = ArgAction::Append, value_parser = parse_kind)]
    pub kinds: Vec<DependencyKind>,

    /// Compare two specification versions instead of reading a manifest
    #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
    pub compare: Option<Vec<String>>,
}

impl CliArgs {
    /// Returns the pair of versions to compare, if comparison mode was requested
    pub fn comparison_pair(&self) -> Option<(&str, &str)> {
        match self.compare.as_deref() {
            Some([left, right]) => Some((left.as_str(), right.as_str())),
            _ => None,
        }
    }
}
