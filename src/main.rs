//! modeps - module dependency metadata inspector
//!
//! Reads a module manifest and reports its validated dependencies:
//! - module, package, Java, IDE and capability-token dependencies
//! - specification version comparisons

use clap::Parser;
use modeps::cli::CliArgs;
use modeps::domain::{SpecificationVersion, VersionCache};
use modeps::manifest::ModuleManifest;
use modeps::output::{create_formatter, ComparisonReport, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level chosen by `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();

    if let Some((left, right)) = args.comparison_pair() {
        let left = SpecificationVersion::parse(left)?;
        let right = SpecificationVersion::parse(right)?;
        formatter.format_comparison(&ComparisonReport::new(left, right), &mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!("modeps v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("reading {}", args.path.display());

    let cache = VersionCache::new();
    let manifest = ModuleManifest::from_path(&args.path, &cache)?;
    tracing::debug!("{} distinct specification versions parsed", cache.len());

    formatter.format_manifest(&manifest, &args.kinds, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
