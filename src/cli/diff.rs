//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two concept graphs.

use super::output::render_summary;
use super::{exit_codes, load_pair, GraphPaths};
use crate::color::ColorRegistry;
use crate::config::{AppConfig, OutputFormat};
use crate::diff::{DiffFilter, DiffGraphBuilder};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Options of the `diff` subcommand that are not part of [`AppConfig`].
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    pub paths: GraphPaths,
    /// Print the codes selected by this filter instead of the summary
    pub filter: Option<DiffFilter>,
    /// Exit with [`exit_codes::CHANGES_DETECTED`] if anything differs
    pub fail_on_change: bool,
}

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(options: &DiffOptions, config: &AppConfig) -> Result<i32> {
    let (left, right) = load_pair(&options.paths)?;

    let registry = Arc::new(ColorRegistry::new());
    let diff = DiffGraphBuilder::new()
        .with_config(config.diff.clone())
        .with_registry(Arc::clone(&registry))
        .build(&left, &right)
        .context("Failed to build diff graph")?;

    let summary = diff.summary();
    tracing::info!(
        "{} of {} concepts and {} of {} relations differ",
        summary.nodes.changes(),
        summary.nodes.total(),
        summary.edges.changes(),
        summary.edges.total()
    );

    if let Some(filter) = options.filter {
        for code in diff.filter_codes(filter) {
            println!("{code}");
        }
    } else {
        match config.output.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&diff)
                    .context("Failed to serialize diff graph")?;
                println!("{json}");
            }
            OutputFormat::Summary => {
                print!("{}", render_summary(&diff, &registry, !config.output.no_color));
            }
        }
    }

    if options.fail_on_change && summary.has_changes() {
        return Ok(exit_codes::CHANGES_DETECTED);
    }
    Ok(exit_codes::SUCCESS)
}
